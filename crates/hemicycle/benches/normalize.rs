use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use hemicycle_core::Document;
use hemicycle_normalize::{normalize_amendments, normalize_bills, normalize_deputies};
use hemicycle_pipeline::{compute_activity, deputy_statistics};
use serde_json::json;
use std::hint::black_box;

fn amendments(n: usize) -> Vec<Document> {
    let outcomes = ["Adopté", "Rejeté", "Tombé", "Non soutenu"];
    (0..n)
        .map(|i| {
            Document::json(
                format!("json/AM{}.json", i),
                json!({"amendement": {
                    "uid": format!("AM{}", i),
                    "identification": {"numeroLong": i.to_string()},
                    "signataires": {
                        "auteur": {"acteurRef": format!("PA{}", i % 577)},
                        "cosignataires": {"acteurRef": ["PA1", "PA2", "PA3"]}
                    },
                    "cycleDeVie": {
                        "dateDepot": "2024-10-01",
                        "etatDesTraitements": {"etat": {"code": "T", "libelle": "Traité"}},
                        "sort": {"code": "X", "libelle": outcomes[i % outcomes.len()]}
                    }
                }}),
            )
        })
        .collect()
}

fn deputies(n: usize) -> Vec<Document> {
    let mut documents: Vec<Document> = (0..8)
        .map(|g| {
            Document::json(
                format!("organe/PO{}.json", g),
                json!({"organe": {"uid": format!("PO{}", g), "libelleAbrev": format!("G{}", g)}}),
            )
        })
        .collect();
    documents.extend((0..n).map(|i| {
        Document::json(
            format!("acteur/PA{}.json", i),
            json!({"acteur": {
                "uid": {"#text": format!("PA{}", i)},
                "etatCivil": {
                    "ident": {"civ": "Mme", "prenom": "A", "nom": format!("N{}", i)},
                    "infoNaissance": {"dateNais": "1975-03-04"}
                },
                "mandats": {"mandat": [
                    {"typeOrgane": "ASSEMBLEE", "election": {"lieu": {"departement": format!("D{}", i % 101)}}},
                    {"typeOrgane": "GP", "organes": {"organeRef": format!("PO{}", i % 8)}}
                ]}
            }}),
        )
    }));
    documents
}

/// Acts nested `depth` levels, two children per level
fn nested_dossier(depth: usize) -> Document {
    fn acts(level: usize) -> serde_json::Value {
        let leaf = json!({"dateActe": format!("2024-01-{:02}T00:00:00", level + 1),
                          "libelleActe": {"nomCanonique": format!("Acte {}", level)}});
        if level == 0 {
            return leaf;
        }
        json!({"libelleActe": {"nomCanonique": format!("Étape {}", level)},
               "actesLegislatifs": {"acteLegislatif": [acts(level - 1), acts(level - 1)]}})
    }
    Document::json(
        "dossier.json",
        json!({"dossierParlementaire": {
            "uid": "DLR5L17N1",
            "actesLegislatifs": {"acteLegislatif": acts(depth)}
        }}),
    )
}

fn bench_normalize_amendments(c: &mut Criterion) {
    let documents = amendments(5_000);
    c.bench_function("normalize_amendments_5000", |b| {
        b.iter(|| normalize_amendments(black_box(&documents), 17));
    });
}

fn bench_normalize_bills_deep_acts(c: &mut Criterion) {
    let documents: Vec<Document> = (0..50).map(|_| nested_dossier(8)).collect();
    c.bench_function("normalize_bills_depth_8", |b| {
        b.iter(|| normalize_bills(black_box(&documents), 17));
    });
}

fn bench_activity(c: &mut Criterion) {
    let deputies = normalize_deputies(&deputies(577));
    let amendments = normalize_amendments(&amendments(20_000), 17);
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    c.bench_function("compute_activity_577x20000", |b| {
        b.iter(|| compute_activity(black_box(&deputies), black_box(&amendments)));
    });
    c.bench_function("deputy_statistics_577", |b| {
        b.iter(|| deputy_statistics(black_box(&deputies), today));
    });
}

criterion_group!(
    benches,
    bench_normalize_amendments,
    bench_normalize_bills_deep_acts,
    bench_activity
);
criterion_main!(benches);
