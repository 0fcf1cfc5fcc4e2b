use crate::paragraphs::paragraphs;
use crate::summary::transcript_root;
use hemicycle_core::{Document, Paragraph};

/// Paragraphs of the transcript whose file stem is `uid`.
///
/// Only that member is parsed. Unknown uid or malformed XML yields no paragraphs.
pub fn full_text(documents: &[Document], uid: &str) -> Vec<Paragraph> {
    let Some(document) = documents
        .iter()
        .find(|d| d.as_xml().is_some() && d.stem() == uid)
    else {
        tracing::warn!(uid, "no transcript with this uid");
        return Vec::new();
    };

    match transcript_root(document) {
        Ok(root) => paragraphs(&root),
        Err(e) => {
            tracing::warn!(uid, member = %document.name, error = %e, "unreadable transcript");
            Vec::new()
        }
    }
}
