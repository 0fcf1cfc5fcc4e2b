//! Flat records produced by normalization
//!
//! Every record is an immutable snapshot of one archive; refreshing a cache
//! entry replaces the whole table.

use serde::{Deserialize, Serialize};

/// A sitting deputy with the current seat and political group resolved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deputy {
    pub uid: String,
    pub civility: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// `F` for `Mme`, `M` otherwise
    pub gender: String,
    pub birth_date: String,
    pub birth_place: String,
    pub profession: String,
    pub department: String,
    pub department_number: String,
    pub constituency: String,
    /// Empty when the group reference does not resolve
    pub group_code: String,
    pub group_label: String,
}

/// A legislative dossier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub uid: String,
    pub title: String,
    pub procedure: String,
    /// First act date found depth-first, date part only
    pub deposit_date: String,
    /// Label of the last act found depth-first
    pub status: String,
    pub legislature: String,
    pub page_url: String,
}

/// A recorded public vote (scrutin)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub uid: String,
    pub number: i64,
    pub date: String,
    pub title: String,
    pub outcome: String,
    pub voters: i64,
    pub for_count: i64,
    pub against_count: i64,
    pub abstentions: i64,
    pub page_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    pub uid: String,
    pub number: String,
    pub deposit_date: String,
    /// Deputy uid; `None` for government or committee amendments
    pub author: Option<String>,
    pub cosignatories: i64,
    pub state_label: String,
    pub state_code: String,
    pub outcome_label: String,
    pub outcome_code: String,
    pub legislative_text_ref: String,
    pub legislature: String,
}

/// Amendment outcomes of one deputy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStat {
    pub uid: String,
    pub full_name: String,
    pub group_code: String,
    pub group_label: String,
    pub department: String,
    pub total: i64,
    pub adopted: i64,
    pub rejected: i64,
    pub withdrawn: i64,
    pub inadmissible: i64,
    /// `adopted + rejected`
    pub examined: i64,
    /// Percentage of examined amendments adopted; 0 when none examined
    pub success_rate: f64,
}

/// Metadata of one sitting transcript, without its text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebateSummary {
    pub uid: String,
    pub date: String,
    pub session_number: String,
    pub session: String,
    pub agenda: Vec<String>,
    pub speakers: Vec<String>,
    pub speaker_count: i64,
    pub paragraph_count: i64,
    pub preview: String,
}

/// One attributed paragraph of a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub speaker: String,
    pub text: String,
}

impl Paragraph {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}
