use crate::paragraphs::paragraphs;
use crate::xml::parse;
use crate::TranscriptError;
use hemicycle_core::value::date_part;
use hemicycle_core::{DebateSummary, Document, Node, TranscriptSettings};

const ROOT_TAG: &str = "compteRendu";

/// Summaries of every transcript in the archive; malformed members are
/// logged and skipped
pub fn list_debates(documents: &[Document], settings: &TranscriptSettings) -> Vec<DebateSummary> {
    let mut debates = Vec::new();
    let mut skipped = 0usize;
    for document in documents {
        match summarize(document, settings) {
            Ok(summary) => debates.push(summary),
            Err(e) => {
                skipped += 1;
                tracing::warn!(member = %document.name, error = %e, "skipping transcript");
            }
        }
    }
    tracing::info!(debates = debates.len(), skipped, "transcripts summarized");
    debates
}

/// Metadata and counts for one transcript; the paragraphs themselves are dropped
pub fn summarize(
    document: &Document,
    settings: &TranscriptSettings,
) -> Result<DebateSummary, TranscriptError> {
    let root = transcript_root(document)?;
    let meta = root.child("metadonnees");
    let meta_text = |tag: &str| {
        meta.and_then(|m| m.child(tag))
            .map(|n| n.text_content().trim().to_string())
            .unwrap_or_default()
    };

    let agenda: Vec<String> = meta
        .and_then(|m| m.child("sommaire"))
        .map(|sommaire| {
            sommaire
                .find_all("titreStruct")
                .filter_map(|t| t.child("intitule"))
                .map(|i| i.text_content().trim().to_string())
                .filter(|s| !s.is_empty())
                .take(settings.agenda_cap)
                .collect()
        })
        .unwrap_or_default();

    let paragraphs = paragraphs(&root);
    let mut speakers: Vec<String> = Vec::new();
    for p in &paragraphs {
        if !p.speaker.is_empty() && !speakers.contains(&p.speaker) {
            speakers.push(p.speaker.clone());
        }
    }
    let preview: String = paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(settings.preview_chars)
        .collect();

    Ok(DebateSummary {
        uid: document.stem().to_string(),
        date: session_date(&meta_text("dateSeance")),
        session_number: meta_text("numSeance"),
        session: meta_text("session"),
        agenda,
        speaker_count: speakers.len() as i64,
        speakers,
        paragraph_count: paragraphs.len() as i64,
        preview,
    })
}

pub(crate) fn transcript_root(document: &Document) -> Result<Node, TranscriptError> {
    let text = document
        .as_xml()
        .ok_or_else(|| TranscriptError::NotXml(document.name.clone()))?;
    let root = parse(text)?;
    if root.tag != ROOT_TAG {
        return Err(TranscriptError::NotTranscript(root.tag));
    }
    Ok(root)
}

/// `20241002150000000` -> `2024-10-02`; ISO timestamps keep their date part
fn session_date(raw: &str) -> String {
    let digits = raw.get(..8).filter(|d| d.bytes().all(|b| b.is_ascii_digit()));
    match digits {
        Some(d) => format!("{}-{}-{}", &d[..4], &d[4..6], &d[6..]),
        None => date_part(raw),
    }
}
