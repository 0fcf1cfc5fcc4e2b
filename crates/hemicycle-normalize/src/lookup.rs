use hemicycle_core::value::{text_at, text_of};
use hemicycle_core::Document;
use std::collections::HashMap;

/// Political group as resolved from an `organe` record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub code: String,
    pub label: String,
}

/// `organe` uid -> group, built from the documents declared alongside the actors
#[derive(Debug, Default)]
pub struct OrganeLookup {
    organes: HashMap<String, Group>,
}

impl OrganeLookup {
    pub fn build(documents: &[Document]) -> Self {
        let mut organes = HashMap::new();
        for organe in crate::roots(documents, "organe") {
            let uid = text_of(organe.get("uid"));
            if uid.is_empty() {
                continue;
            }
            organes.insert(
                uid,
                Group {
                    code: text_at(organe, &["libelleAbrev"]),
                    label: text_at(organe, &["libelle"]),
                },
            );
        }
        tracing::debug!(organes = organes.len(), "organe lookup built");
        Self { organes }
    }

    /// `None` for an empty or dangling reference
    pub fn resolve(&self, uid: &str) -> Option<&Group> {
        self.organes.get(uid)
    }

    pub fn len(&self) -> usize {
        self.organes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organes.is_empty()
    }
}
