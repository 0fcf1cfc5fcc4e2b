//! Catalogue of the open-data archives and their URL templates

use serde::{Deserialize, Serialize};
use std::fmt;

/// One downloadable archive family of the open-data repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Deputies,
    Bills,
    Votes,
    Amendments,
    Debates,
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::Deputies,
        Dataset::Bills,
        Dataset::Votes,
        Dataset::Amendments,
        Dataset::Debates,
    ];

    /// Stable name used in cache keys and logs
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Deputies => "deputies",
            Dataset::Bills => "bills",
            Dataset::Votes => "votes",
            Dataset::Amendments => "amendments",
            Dataset::Debates => "debates",
        }
    }

    /// Archive path relative to `{base_url}/{legislature}/`
    pub fn archive_path(self) -> &'static str {
        match self {
            Dataset::Deputies => {
                "amo/deputes_actifs_mandats_actifs_organes/AMO10_deputes_actifs_mandats_actifs_organes.json.zip"
            }
            Dataset::Bills => "loi/dossiers_legislatifs/Dossiers_Legislatifs.json.zip",
            Dataset::Votes => "loi/scrutins/Scrutins.json.zip",
            Dataset::Amendments => "loi/amendements_div_legis/Amendements.json.zip",
            Dataset::Debates => "vp/syceronbrut/syseron.xml.zip",
        }
    }

    pub fn url(self, base_url: &str, legislature: u32) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            legislature,
            self.archive_path()
        )
    }

    /// The transcript archive is hundreds of MB and gets the long timeout/TTL
    pub fn is_transcript(self) -> bool {
        matches!(self, Dataset::Debates)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
