mod common;

use common::*;
use hemicycle_core::Dataset;
use serde_json::json;

fn amendments_archive() -> Vec<u8> {
    json_archive(vec![
        ("AM1.json".into(), amendment("AM1", Some("PA1"), json!({"code": "ADO", "libelle": "Adopté"}), "Traité")),
        ("AM2.json".into(), amendment("AM2", Some("PA1"), json!({"code": "REJ", "libelle": "Rejeté"}), "Traité")),
        ("AM3.json".into(), amendment("AM3", Some("PA1"), json!("Retiré"), "Retiré")),
        ("AM4.json".into(), amendment("AM4", Some("PA2"), json!(null), "Irrecevable")),
        ("AM5.json".into(), amendment("AM5", None, json!({"libelle": "Adopté"}), "Traité")),
        ("AM6.json".into(), amendment("AM6", Some("PA999"), json!({"libelle": "Adopté"}), "Traité")),
    ])
}

#[test]
fn test_activity_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = FakeServer::new();
    server
        .serve(Dataset::Deputies, deputies_archive())
        .serve(Dataset::Amendments, amendments_archive());
    let pipeline = pipeline(dir.path(), &server, &RecordingSleeper::default(), &clock());

    let stats = pipeline.activity(LEGISLATURE);
    assert_eq!(stats.len(), 2, "authors without a deputy row are dropped");

    let pa1 = &stats[0];
    assert_eq!(pa1.uid, "PA1");
    assert_eq!(pa1.full_name, "Anne Martin");
    assert_eq!(pa1.group_code, "RE");
    assert_eq!(pa1.total, 3);
    assert_eq!(pa1.adopted, 1);
    assert_eq!(pa1.rejected, 1);
    assert_eq!(pa1.withdrawn, 1);
    assert_eq!(pa1.examined, 2);
    assert_eq!(pa1.success_rate, 50.0);

    let pa2 = &stats[1];
    assert_eq!(pa2.uid, "PA2");
    assert_eq!(pa2.group_code, "", "dangling group reference stays empty");
    assert_eq!(pa2.inadmissible, 1);
    assert_eq!(pa2.examined, 0);
    assert_eq!(pa2.success_rate, 0.0);
}

#[test]
fn test_activity_without_amendments_is_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = FakeServer::new();
    server.serve(Dataset::Deputies, deputies_archive());
    let pipeline = pipeline(dir.path(), &server, &RecordingSleeper::default(), &clock());

    assert_eq!(pipeline.get_deputies(LEGISLATURE).len(), 2);
    assert!(pipeline.activity(LEGISLATURE).is_empty());
}

#[test]
fn test_statistics_over_cached_tables() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = FakeServer::new();
    server.serve(Dataset::Deputies, deputies_archive());
    let pipeline = pipeline(dir.path(), &server, &RecordingSleeper::default(), &clock());

    let stats = pipeline.statistics(LEGISLATURE);
    assert_eq!(stats.deputies.total, 2);
    assert_eq!(stats.deputies.by_gender["F"], 1);
    assert_eq!(stats.deputies.by_group["RE"], 1);
    assert_eq!(stats.deputies.top_departments[0], ("Paris".to_string(), 2));
    assert!(stats.deputies.average_age.is_some());
    assert_eq!(stats.votes.total, 0);
}
