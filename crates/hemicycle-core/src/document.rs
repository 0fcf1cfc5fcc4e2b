//! Parsed members of a downloaded archive

use serde::{Deserialize, Serialize};

/// One member of an archive, parsed according to its extension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Member path inside the archive
    pub name: String,
    pub body: DocumentBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum DocumentBody {
    Json(serde_json::Value),
    /// Kept as text; transcripts are parsed on demand
    Xml(String),
}

impl Document {
    pub fn json(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            body: DocumentBody::Json(value),
        }
    }

    pub fn xml(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: DocumentBody::Xml(text.into()),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            DocumentBody::Json(value) => Some(value),
            DocumentBody::Xml(_) => None,
        }
    }

    pub fn as_xml(&self) -> Option<&str> {
        match &self.body {
            DocumentBody::Xml(text) => Some(text),
            DocumentBody::Json(_) => None,
        }
    }

    /// File name without directories or extension, e.g. `CRSANR5L17S2024O1N001`
    pub fn stem(&self) -> &str {
        let file = self.name.rsplit(['/', '\\']).next().unwrap_or(&self.name);
        match file.rfind('.') {
            Some(0) | None => file,
            Some(dot) => &file[..dot],
        }
    }
}
