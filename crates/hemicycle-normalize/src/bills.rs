use crate::acts::acts_tree;
use hemicycle_core::tree::{first_match, last_match};
use hemicycle_core::value::{date_part, text_at, text_of};
use hemicycle_core::{Bill, Document};
use serde_json::Value;

/// Bills from the legislative-dossier archive
///
/// The deposit date is the first act date in depth-first order; the status
/// is the label of the last act in that same walk.
pub fn normalize_bills(documents: &[Document], legislature: u32) -> Vec<Bill> {
    let bills: Vec<Bill> = crate::roots(documents, "dossierParlementaire")
        .map(|dossier| bill(dossier, legislature))
        .collect();
    tracing::info!(bills = bills.len(), legislature, "bills normalized");
    bills
}

fn bill(dossier: &Value, legislature: u32) -> Bill {
    let acts = acts_tree(dossier);
    let deposit_date = first_match(&acts, |n| n.field("date"))
        .map(date_part)
        .unwrap_or_default();
    let status = last_match(&acts, |n| n.field("libelle"))
        .unwrap_or_default()
        .to_string();

    let uid = text_of(dossier.get("uid"));
    let mut leg = text_of(dossier.get("legislature"));
    if leg.is_empty() {
        leg = legislature.to_string();
    }
    let page_url = if uid.is_empty() {
        String::new()
    } else {
        format!(
            "https://www.assemblee-nationale.fr/dyn/{}/dossiers/{}",
            leg, uid
        )
    };

    Bill {
        title: text_at(dossier, &["titreDossier", "titre"]),
        procedure: text_at(dossier, &["procedureParlementaire", "libelle"]),
        uid,
        deposit_date,
        status,
        legislature: leg,
        page_url,
    }
}
