use hemicycle_core::value::{as_i64, path, text_at, text_of};
use hemicycle_core::{Document, Vote};
use serde_json::Value;

pub fn normalize_votes(documents: &[Document], legislature: u32) -> Vec<Vote> {
    let votes: Vec<Vote> = crate::roots(documents, "scrutin")
        .map(|scrutin| vote(scrutin, legislature))
        .collect();
    tracing::info!(votes = votes.len(), legislature, "votes normalized");
    votes
}

/// Number of vote records, without building them
pub fn count_votes(documents: &[Document]) -> usize {
    crate::roots(documents, "scrutin").count()
}

fn vote(scrutin: &Value, legislature: u32) -> Vote {
    let uid = text_of(scrutin.get("uid"));
    let tally = |key: &str| as_i64(path(scrutin, &["syntheseVote", "decompte", key]));
    let page_url = if uid.is_empty() {
        String::new()
    } else {
        format!(
            "https://www.assemblee-nationale.fr/dyn/{}/scrutins/{}",
            legislature, uid
        )
    };

    Vote {
        number: as_i64(scrutin.get("numero")),
        date: text_of(scrutin.get("dateScrutin")),
        title: text_of(scrutin.get("titre")),
        outcome: text_at(scrutin, &["sort", "libelle"]),
        voters: as_i64(path(scrutin, &["syntheseVote", "nombreVotants"])),
        for_count: tally("pour"),
        against_count: tally("contre"),
        abstentions: tally("abstentions"),
        uid,
        page_url,
    }
}
