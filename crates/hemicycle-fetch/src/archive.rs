//! In-memory ZIP extraction with per-member isolation

use crate::MemberError;
use hemicycle_core::Document;
use std::io::{Cursor, Read};

/// Parsed members plus the ones that had to be skipped
#[derive(Debug, Default)]
pub struct Extraction {
    pub documents: Vec<Document>,
    pub skipped: Vec<SkippedMember>,
}

#[derive(Debug)]
pub struct SkippedMember {
    pub name: String,
    pub error: MemberError,
}

enum MemberKind {
    Json,
    Xml,
}

fn member_kind(name: &str) -> Option<MemberKind> {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".json") {
        Some(MemberKind::Json)
    } else if lower.ends_with(".xml") {
        Some(MemberKind::Xml)
    } else {
        None
    }
}

/// Parse every `.json`/`.xml` member of a ZIP body
///
/// Only an unreadable central directory fails the whole archive; a member
/// that cannot be read or parsed is logged and skipped.
pub fn extract(bytes: &[u8]) -> Result<Extraction, zip::result::ZipError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut extraction = Extraction::default();

    for index in 0..archive.len() {
        let mut member = match archive.by_index(index) {
            Ok(member) => member,
            Err(e) => {
                skip(
                    &mut extraction,
                    format!("#{index}"),
                    MemberError::Read(e.to_string()),
                );
                continue;
            }
        };
        if member.is_dir() {
            continue;
        }
        let name = member.name().to_string();
        let Some(kind) = member_kind(&name) else {
            continue;
        };

        let mut raw = Vec::new();
        if let Err(e) = member.read_to_end(&mut raw) {
            skip(&mut extraction, name, MemberError::Read(e.to_string()));
            continue;
        }

        let parsed = match kind {
            MemberKind::Json => serde_json::from_slice(&raw)
                .map(|value| Document::json(name.clone(), value))
                .map_err(MemberError::from),
            MemberKind::Xml => String::from_utf8(raw)
                .map(|text| Document::xml(name.clone(), text))
                .map_err(MemberError::from),
        };
        match parsed {
            Ok(document) => extraction.documents.push(document),
            Err(error) => skip(&mut extraction, name, error),
        }
    }

    Ok(extraction)
}

fn skip(extraction: &mut Extraction, name: String, error: MemberError) {
    tracing::warn!(member = %name, error = %error, "skipping archive member");
    extraction.skipped.push(SkippedMember { name, error });
}
