use hemicycle_core::value::{as_seq, path, text_at, text_of};
use hemicycle_core::{Amendment, Document};
use serde_json::Value;

pub fn normalize_amendments(documents: &[Document], legislature: u32) -> Vec<Amendment> {
    let amendments: Vec<Amendment> = crate::roots(documents, "amendement")
        .map(|amendement| amendment(amendement, legislature))
        .collect();
    tracing::info!(
        amendments = amendments.len(),
        legislature,
        "amendments normalized"
    );
    amendments
}

fn amendment(amendement: &Value, legislature: u32) -> Amendment {
    let author = text_at(amendement, &["signataires", "auteur", "acteurRef"]);
    let cosignatories = as_seq(path(
        amendement,
        &["signataires", "cosignataires", "acteurRef"],
    ))
    .into_iter()
    .filter(|r| !text_of(Some(*r)).is_empty())
    .count();

    let cycle = amendement.get("cycleDeVie");
    let etat = cycle.and_then(|c| path(c, &["etatDesTraitements", "etat"]));
    let (outcome_label, outcome_code) = outcome(cycle.and_then(|c| c.get("sort")));

    Amendment {
        uid: text_of(amendement.get("uid")),
        number: text_at(amendement, &["identification", "numeroLong"]),
        deposit_date: cycle
            .map(|c| text_of(c.get("dateDepot")))
            .unwrap_or_default(),
        author: if author.is_empty() { None } else { Some(author) },
        cosignatories: cosignatories as i64,
        state_label: etat.map(|e| text_at(e, &["libelle"])).unwrap_or_default(),
        state_code: etat.map(|e| text_at(e, &["code"])).unwrap_or_default(),
        outcome_label,
        outcome_code,
        legislative_text_ref: text_of(amendement.get("texteLegislatifRef")),
        legislature: legislature.to_string(),
    }
}

/// `sort` is either a bare string or `{code, libelle}`
fn outcome(sort: Option<&Value>) -> (String, String) {
    match sort {
        Some(Value::String(s)) => (s.clone(), s.clone()),
        Some(value @ Value::Object(_)) => (text_at(value, &["libelle"]), text_at(value, &["code"])),
        _ => (String::new(), String::new()),
    }
}
