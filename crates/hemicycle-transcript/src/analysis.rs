//! Seam for text analysis over extracted paragraphs

use hemicycle_core::Paragraph;
use serde::Serialize;

/// Consumes the ordered paragraphs of one debate. The pipeline never looks
/// inside `Output`.
pub trait TextAnalyzer {
    type Output;

    fn analyze(&self, paragraphs: &[Paragraph]) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerActivity {
    pub speaker: String,
    pub paragraphs: usize,
    pub words: usize,
}

/// Paragraph and word counts per speaker, in order of first appearance.
/// Unattributed paragraphs are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeakerTally;

impl TextAnalyzer for SpeakerTally {
    type Output = Vec<SpeakerActivity>;

    fn analyze(&self, paragraphs: &[Paragraph]) -> Self::Output {
        let mut tally: Vec<SpeakerActivity> = Vec::new();
        for p in paragraphs.iter().filter(|p| !p.speaker.is_empty()) {
            let words = p.text.split_whitespace().count();
            match tally.iter_mut().find(|a| a.speaker == p.speaker) {
                Some(activity) => {
                    activity.paragraphs += 1;
                    activity.words += words;
                }
                None => tally.push(SpeakerActivity {
                    speaker: p.speaker.clone(),
                    paragraphs: 1,
                    words,
                }),
            }
        }
        tally
    }
}
