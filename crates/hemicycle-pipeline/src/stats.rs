//! Summary statistics over normalized tables

use chrono::{Datelike, NaiveDate};
use hemicycle_core::value::date_part;
use hemicycle_core::{Deputy, Vote};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeputyStatistics {
    pub total: usize,
    pub by_gender: BTreeMap<String, usize>,
    pub by_group: BTreeMap<String, usize>,
    /// Ten largest departments, largest first
    pub top_departments: Vec<(String, usize)>,
    /// `None` when no birth date parses
    pub average_age: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoteStatistics {
    pub total: usize,
    pub by_outcome: BTreeMap<String, usize>,
    pub average_voters: Option<i64>,
}

const TOP_DEPARTMENTS: usize = 10;

pub fn deputy_statistics(deputies: &[Deputy], today: NaiveDate) -> DeputyStatistics {
    let mut stats = DeputyStatistics {
        total: deputies.len(),
        ..Default::default()
    };

    let mut departments: HashMap<&str, usize> = HashMap::new();
    let mut ages: Vec<i32> = Vec::new();
    for deputy in deputies {
        *stats.by_gender.entry(deputy.gender.clone()).or_default() += 1;
        if !deputy.group_code.is_empty() {
            *stats.by_group.entry(deputy.group_code.clone()).or_default() += 1;
        }
        if !deputy.department.is_empty() {
            *departments.entry(deputy.department.as_str()).or_default() += 1;
        }
        if let Ok(born) = NaiveDate::parse_from_str(&date_part(&deputy.birth_date), "%Y-%m-%d") {
            ages.push(today.year() - born.year());
        }
    }

    let mut departments: Vec<(String, usize)> = departments
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    departments.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    departments.truncate(TOP_DEPARTMENTS);
    stats.top_departments = departments;

    if !ages.is_empty() {
        let mean = ages.iter().map(|&a| f64::from(a)).sum::<f64>() / ages.len() as f64;
        stats.average_age = Some((mean * 10.0).round() / 10.0);
    }
    stats
}

pub fn vote_statistics(votes: &[Vote]) -> VoteStatistics {
    let mut by_outcome = BTreeMap::new();
    for vote in votes {
        *by_outcome.entry(vote.outcome.clone()).or_default() += 1;
    }
    let average_voters = if votes.is_empty() {
        None
    } else {
        let sum: i64 = votes.iter().map(|v| v.voters).sum();
        Some((sum as f64 / votes.len() as f64).round() as i64)
    };
    VoteStatistics {
        total: votes.len(),
        by_outcome,
        average_voters,
    }
}
