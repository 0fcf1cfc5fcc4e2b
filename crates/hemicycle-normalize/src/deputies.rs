use crate::lookup::OrganeLookup;
use hemicycle_core::value::{as_seq, path, text_at, text_of};
use hemicycle_core::{Deputy, Document};
use serde_json::Value;

/// Deputies from the AMO archive, with seat and group resolved from their mandates
pub fn normalize_deputies(documents: &[Document]) -> Vec<Deputy> {
    let organes = OrganeLookup::build(documents);
    let deputies: Vec<Deputy> = crate::roots(documents, "acteur")
        .map(|acteur| deputy(acteur, &organes))
        .collect();
    tracing::info!(
        deputies = deputies.len(),
        organes = organes.len(),
        "deputies normalized"
    );
    deputies
}

fn deputy(acteur: &Value, organes: &OrganeLookup) -> Deputy {
    let civility = text_at(acteur, &["etatCivil", "ident", "civ"]);
    let first_name = text_at(acteur, &["etatCivil", "ident", "prenom"]);
    let last_name = text_at(acteur, &["etatCivil", "ident", "nom"]);
    let full_name = format!("{} {}", first_name, last_name).trim().to_string();

    let mut deputy = Deputy {
        uid: text_of(acteur.get("uid")),
        gender: if civility == "Mme" { "F" } else { "M" }.to_string(),
        civility,
        first_name,
        last_name,
        full_name,
        birth_date: text_at(acteur, &["etatCivil", "infoNaissance", "dateNais"]),
        birth_place: text_at(acteur, &["etatCivil", "infoNaissance", "villeNais"]),
        profession: text_at(acteur, &["profession", "libelleCourant"]),
        ..Deputy::default()
    };

    let mut seated = false;
    let mut grouped = false;
    for mandat in as_seq(path(acteur, &["mandats", "mandat"])) {
        match text_of(mandat.get("typeOrgane")).as_str() {
            "ASSEMBLEE" if !seated => {
                seated = true;
                let lieu = path(mandat, &["election", "lieu"]);
                let field = |key: &str| lieu.map(|l| text_at(l, &[key])).unwrap_or_default();
                deputy.department = field("departement");
                deputy.department_number = field("numDepartement");
                deputy.constituency = field("numCirco");
            }
            "GP" if !grouped => {
                grouped = true;
                let reference = text_at(mandat, &["organes", "organeRef"]);
                if let Some(group) = organes.resolve(&reference) {
                    deputy.group_code = group.code.clone();
                    deputy.group_label = group.label.clone();
                }
            }
            _ => {}
        }
    }
    deputy
}
