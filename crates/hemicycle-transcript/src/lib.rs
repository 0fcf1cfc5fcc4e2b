//! Session transcripts (`compteRendu` XML): summaries, full text, and the
//! seam for text analysis

mod analysis;
mod error;
mod fulltext;
mod paragraphs;
mod speaker;
mod summary;
mod xml;

pub use analysis::{SpeakerActivity, SpeakerTally, TextAnalyzer};
pub use error::TranscriptError;
pub use fulltext::full_text;
pub use paragraphs::paragraphs;
pub use speaker::attribute;
pub use summary::{list_debates, summarize};
pub use xml::parse;
