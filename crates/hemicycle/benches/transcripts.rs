use criterion::{criterion_group, criterion_main, Criterion};
use hemicycle_core::{Document, TranscriptSettings};
use hemicycle_transcript::{full_text, list_debates};
use std::hint::black_box;

fn transcript(paragraphs: usize) -> String {
    let speakers = ["Mme la présidente", "M. Paul Durand", "Mme Claire Petit"];
    let body: String = (0..paragraphs)
        .map(|i| {
            format!(
                "<paragraphe><texte>{}. Intervention numéro {} sur le projet de loi.</texte></paragraphe>",
                speakers[i % speakers.len()],
                i
            )
        })
        .collect();
    format!(
        "<compteRendu><metadonnees><dateSeance>20241002150000000</dateSeance>\
         <sommaire><titreStruct><intitule>Point</intitule></titreStruct></sommaire>\
         </metadonnees><contenu>{}</contenu></compteRendu>",
        body
    )
}

fn bench_list_debates(c: &mut Criterion) {
    let documents: Vec<Document> = (0..40)
        .map(|i| Document::xml(format!("CR{}.xml", i), transcript(400)))
        .collect();
    let settings = TranscriptSettings::default();
    c.bench_function("list_debates_40x400", |b| {
        b.iter(|| list_debates(black_box(&documents), &settings));
    });
    c.bench_function("full_text_one_of_40", |b| {
        b.iter(|| full_text(black_box(&documents), "CR39"));
    });
}

criterion_group!(benches, bench_list_debates);
criterion_main!(benches);
