use crate::speaker::attribute;
use hemicycle_core::{Node, Paragraph};

/// Ordered `{speaker, text}` records from `contenu//paragraphe`.
/// Paragraphs with no text are skipped.
pub fn paragraphs(transcript: &Node) -> Vec<Paragraph> {
    let Some(contenu) = transcript.child("contenu") else {
        return Vec::new();
    };

    let mut known: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for paragraphe in contenu.find_all("paragraphe") {
        let text = paragraphe
            .child("texte")
            .map(Node::text_content)
            .unwrap_or_default();
        if text.trim().is_empty() {
            continue;
        }
        let structured = paragraphe
            .descend(&["orateurs", "orateur", "nom"])
            .map(Node::text_content);

        let paragraph = attribute(structured.as_deref(), &text, &known);
        if !paragraph.speaker.is_empty() && !known.contains(&paragraph.speaker) {
            known.push(paragraph.speaker.clone());
        }
        out.push(paragraph);
    }
    out
}
