//! Amendment outcomes aggregated per deputy

use hemicycle_core::{ActivityStat, Amendment, Deputy};
use std::collections::HashMap;

const ADOPTED: &str = "adopt";
const REJECTED: &str = "rejet";
const WITHDRAWN: &str = "retir";
const INADMISSIBLE: &str = "irrecevab";

#[derive(Default)]
struct Tally {
    total: i64,
    adopted: i64,
    rejected: i64,
    withdrawn: i64,
    inadmissible: i64,
}

/// Lowercased outcome and state labels
struct Labels(String, String);

impl Labels {
    fn of(amendment: &Amendment) -> Self {
        Self(
            amendment.outcome_label.to_lowercase(),
            amendment.state_label.to_lowercase(),
        )
    }

    fn mentions(&self, stem: &str) -> bool {
        self.0.contains(stem) || self.1.contains(stem)
    }
}

/// Per-author counts joined onto the deputy table.
///
/// Each outcome is an independent case-insensitive substring test, so one
/// amendment may count under several. Authors without a deputy row
/// (government, committees) are dropped. Rows are ordered by total
/// descending, then uid.
pub fn compute_activity(deputies: &[Deputy], amendments: &[Amendment]) -> Vec<ActivityStat> {
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for amendment in amendments {
        let Some(author) = amendment.author.as_deref().filter(|a| !a.is_empty()) else {
            continue;
        };
        let labels = Labels::of(amendment);
        let tally = tallies.entry(author).or_default();
        tally.total += 1;
        tally.adopted += i64::from(labels.mentions(ADOPTED));
        tally.rejected += i64::from(labels.mentions(REJECTED));
        tally.withdrawn += i64::from(labels.mentions(WITHDRAWN));
        tally.inadmissible += i64::from(labels.mentions(INADMISSIBLE));
    }

    let mut stats: Vec<ActivityStat> = deputies
        .iter()
        .filter_map(|deputy| {
            let tally = tallies.get(deputy.uid.as_str())?;
            let examined = tally.adopted + tally.rejected;
            let success_rate = if examined == 0 {
                0.0
            } else {
                tally.adopted as f64 / examined as f64 * 100.0
            };
            Some(ActivityStat {
                uid: deputy.uid.clone(),
                full_name: deputy.full_name.clone(),
                group_code: deputy.group_code.clone(),
                group_label: deputy.group_label.clone(),
                department: deputy.department.clone(),
                total: tally.total,
                adopted: tally.adopted,
                rejected: tally.rejected,
                withdrawn: tally.withdrawn,
                inadmissible: tally.inadmissible,
                examined,
                success_rate,
            })
        })
        .collect();

    stats.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.uid.cmp(&b.uid)));
    tracing::debug!(
        authors = tallies.len(),
        matched = stats.len(),
        "activity computed"
    );
    stats
}
