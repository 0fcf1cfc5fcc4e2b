#![allow(dead_code)]

use hemicycle_core::{Config, Dataset, ManualClock};
use hemicycle_fetch::{HttpResponse, Sleeper, Transport, TransportError};
use hemicycle_pipeline::Pipeline;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

pub const LEGISLATURE: u32 = 17;

/// Serves archives by URL. A URL can first be given a queue of failing
/// replies; unknown URLs get a 404.
#[derive(Clone, Default)]
pub struct FakeServer {
    archives: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    failures: Arc<Mutex<HashMap<String, VecDeque<Result<HttpResponse, TransportError>>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, dataset: Dataset, archive: Vec<u8>) -> &Self {
        self.archives
            .lock()
            .unwrap()
            .insert(url(dataset), archive);
        self
    }

    pub fn fail_first(&self, dataset: Dataset, reply: Result<HttpResponse, TransportError>) {
        self.failures
            .lock()
            .unwrap()
            .entry(url(dataset))
            .or_default()
            .push_back(reply);
    }

    pub fn requests_for(&self, dataset: Dataset) -> usize {
        let target = url(dataset);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| **u == target)
            .count()
    }
}

impl Transport for FakeServer {
    fn get(&self, url: &str, _timeout: Duration) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(reply) = self
            .failures
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
        {
            return reply;
        }
        Ok(match self.archives.lock().unwrap().get(url) {
            Some(body) => HttpResponse {
                status: 200,
                body: body.clone(),
            },
            None => HttpResponse {
                status: 404,
                body: Vec::new(),
            },
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingSleeper {
    pub waits: Arc<Mutex<Vec<Duration>>>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

pub fn url(dataset: Dataset) -> String {
    dataset.url(&Config::new().base_url, LEGISLATURE)
}

pub fn status(code: u16) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: code,
        body: Vec::new(),
    })
}

pub fn pipeline(
    root: &Path,
    server: &FakeServer,
    sleeper: &RecordingSleeper,
    clock: &Arc<ManualClock>,
) -> Pipeline {
    Pipeline::with_parts(
        Config::new(),
        root,
        Box::new(server.clone()),
        Box::new(sleeper.clone()),
        clock.clone(),
    )
    .unwrap()
}

pub fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(SystemTime::now()))
}

pub fn zip_bytes(members: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, body) in members {
        writer
            .start_file(name.as_str(), zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn json_archive(members: Vec<(String, Value)>) -> Vec<u8> {
    let members: Vec<(String, Vec<u8>)> = members
        .into_iter()
        .map(|(name, value)| (name, serde_json::to_vec(&value).unwrap()))
        .collect();
    zip_bytes(&members)
}

/// One group organe and two deputies, PA1 in that group and PA2 pointing at
/// an organe missing from the archive
pub fn deputies_archive() -> Vec<u8> {
    json_archive(vec![
        (
            "json/organe/PO800490.json".into(),
            json!({"organe": {"uid": "PO800490", "libelleAbrev": "RE", "libelle": "Ensemble pour la République"}}),
        ),
        (
            "json/acteur/PA1.json".into(),
            acteur("PA1", "Mme", "Anne", "Martin", "1970-05-01", "PO800490"),
        ),
        (
            "json/acteur/PA2.json".into(),
            acteur("PA2", "M.", "Paul", "Durand", "1980-01-01", "PO000404"),
        ),
    ])
}

fn acteur(uid: &str, civ: &str, first: &str, last: &str, born: &str, group: &str) -> Value {
    json!({"acteur": {
        "uid": {"#text": uid},
        "etatCivil": {
            "ident": {"civ": civ, "prenom": first, "nom": last},
            "infoNaissance": {"dateNais": born, "villeNais": "Paris"}
        },
        "mandats": {"mandat": [
            {"typeOrgane": "ASSEMBLEE", "election": {"lieu": {
                "departement": "Paris", "numDepartement": "75", "numCirco": "1"
            }}},
            {"typeOrgane": "GP", "organes": {"organeRef": group}}
        ]}
    }})
}

pub fn amendment(uid: &str, author: Option<&str>, sort: Value, etat: &str) -> Value {
    let auteur = match author {
        Some(a) => json!({"acteurRef": a}),
        None => json!({"typeAuteur": "Gouvernement"}),
    };
    json!({"amendement": {
        "uid": uid,
        "identification": {"numeroLong": uid},
        "signataires": {"auteur": auteur},
        "cycleDeVie": {
            "dateDepot": "2024-10-01",
            "etatDesTraitements": {"etat": {"code": "X", "libelle": etat}},
            "sort": sort
        }
    }})
}

/// `n` distinct amendments, all by PA1
pub fn numbered_amendments(n: usize) -> Vec<u8> {
    json_archive(
        (0..n)
            .map(|i| {
                let uid = format!("AM{:05}", i);
                (
                    format!("json/{}.json", uid),
                    amendment(&uid, Some("PA1"), json!({"libelle": "Rejeté"}), "Traité"),
                )
            })
            .collect(),
    )
}

pub fn transcript_xml(date: &str, agenda: &[&str], paragraphs: &[(&str, &str)]) -> String {
    let sommaire: String = agenda
        .iter()
        .map(|t| format!("<titreStruct><intitule>{}</intitule></titreStruct>", t))
        .collect();
    let contenu: String = paragraphs
        .iter()
        .map(|(speaker, text)| {
            let orateurs = if speaker.is_empty() {
                String::new()
            } else {
                format!("<orateurs><orateur><nom>{}</nom></orateur></orateurs>", speaker)
            };
            format!("<paragraphe>{}<texte>{}</texte></paragraphe>", orateurs, text)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<compteRendu xmlns="http://schemas.assemblee-nationale.fr/referentiel">
  <metadonnees>
    <dateSeance>{}</dateSeance>
    <numSeance>1</numSeance>
    <session>Session ordinaire 2024-2025</session>
    <sommaire><sommaire1>{}</sommaire1></sommaire>
  </metadonnees>
  <contenu><point>{}</point></contenu>
</compteRendu>"#,
        date, sommaire, contenu
    )
}
