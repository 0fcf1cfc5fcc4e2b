//! Flatten open-data JSON documents into records
//!
//! Every function takes the documents of one archive and skips members that
//! do not carry the expected root key; missing fields become empty strings
//! or zero, never errors.

mod acts;
mod amendments;
mod bills;
mod deputies;
mod lookup;
mod votes;

pub use acts::acts_tree;
pub use amendments::normalize_amendments;
pub use bills::normalize_bills;
pub use deputies::normalize_deputies;
pub use lookup::{Group, OrganeLookup};
pub use votes::{count_votes, normalize_votes};

use hemicycle_core::Document;
use serde_json::Value;

/// Payload under `root` for every JSON document that has it
pub(crate) fn roots<'a>(
    documents: &'a [Document],
    root: &'a str,
) -> impl Iterator<Item = &'a Value> + 'a {
    documents
        .iter()
        .filter_map(|doc| doc.as_json())
        .filter_map(move |value| value.get(root))
        .filter(|value| value.is_object())
}
