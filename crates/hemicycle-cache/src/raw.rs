//! Raw tier: decompressed archive members keyed by URL hash

use crate::io::{atomic_write, is_fresh};
use crate::{CacheError, CachePaths};
use chrono::{DateTime, Utc};
use hemicycle_core::{Clock, Document};
use hemicycle_fetch::{ArchiveFetcher, FetchError, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// What to download and how long a stored copy stays valid
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    pub url: String,
    pub ttl: Duration,
    pub policy: RetryPolicy,
}

#[derive(Deserialize)]
struct RawEntry {
    url: String,
    fetched_at: DateTime<Utc>,
    documents: Vec<Document>,
}

#[derive(Serialize)]
struct RawEntryRef<'a> {
    url: &'a str,
    fetched_at: DateTime<Utc>,
    documents: &'a [Document],
}

pub struct RawCache {
    paths: CachePaths,
    fetcher: ArchiveFetcher,
    clock: Arc<dyn Clock>,
}

impl RawCache {
    pub fn new(paths: CachePaths, fetcher: ArchiveFetcher, clock: Arc<dyn Clock>) -> Self {
        Self {
            paths,
            fetcher,
            clock,
        }
    }

    /// Entry exists and is younger than the request TTL
    pub fn is_valid(&self, request: &ArchiveRequest) -> bool {
        is_fresh(
            &self.paths.raw_entry(&request.url),
            request.ttl,
            self.clock.now(),
        )
    }

    /// Stored payload when valid, otherwise download and store it
    pub fn try_get_or_fetch(&self, request: &ArchiveRequest) -> Result<Vec<Document>, FetchError> {
        let url = request.url.as_str();
        if self.is_valid(request) {
            match self.read(url) {
                Ok(entry) => {
                    let age = DateTime::<Utc>::from(self.clock.now()) - entry.fetched_at;
                    tracing::debug!(
                        url,
                        documents = entry.documents.len(),
                        age_secs = age.num_seconds(),
                        "raw cache hit"
                    );
                    return Ok(entry.documents);
                }
                Err(e) => tracing::warn!(url, error = %e, "unreadable raw cache entry, refetching"),
            }
        } else {
            tracing::debug!(url, "raw cache miss");
        }

        let extraction = self.fetcher.fetch(url, &request.policy)?;
        let documents = extraction.documents;
        if documents.is_empty() {
            tracing::warn!(url, "archive had no usable members, not caching");
        } else if let Err(e) = self.write(url, &documents) {
            tracing::warn!(url, error = %e, "failed to store raw cache entry");
        }
        Ok(documents)
    }

    /// Like [`Self::try_get_or_fetch`] but an unrecoverable fetch yields no documents
    pub fn get_or_fetch(&self, request: &ArchiveRequest) -> Vec<Document> {
        self.try_get_or_fetch(request).unwrap_or_else(|e| {
            tracing::warn!(url = %request.url, error = %e, "fetch failed, returning empty payload");
            Vec::new()
        })
    }

    fn read(&self, url: &str) -> Result<RawEntry, CacheError> {
        let bytes = std::fs::read(self.paths.raw_entry(url))?;
        let entry: RawEntry = serde_json::from_slice(&bytes)?;
        if entry.url != url {
            return Err(CacheError::Corrupt(format!(
                "entry holds {} instead of {}",
                entry.url, url
            )));
        }
        Ok(entry)
    }

    fn write(&self, url: &str, documents: &[Document]) -> Result<(), CacheError> {
        let now = self.clock.now();
        let entry = RawEntryRef {
            url,
            fetched_at: DateTime::<Utc>::from(now),
            documents,
        };
        let bytes = serde_json::to_vec(&entry)?;
        atomic_write(&self.paths.raw_entry(url), &bytes, now)?;
        tracing::info!(url, documents = documents.len(), "raw cache entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemicycle_core::ManualClock;
    use hemicycle_fetch::{HttpResponse, Transport, TransportError};
    use std::io::Write;
    use std::sync::Mutex;
    use std::time::SystemTime;

    const URL: &str = "https://example.org/17/loi/scrutins/Scrutins.json.zip";

    /// Serves the same reply forever and counts requests
    #[derive(Clone)]
    struct FixedTransport {
        reply: Result<HttpResponse, TransportError>,
        calls: Arc<Mutex<usize>>,
    }

    impl FixedTransport {
        fn serving(body: Vec<u8>) -> Self {
            Self {
                reply: Ok(HttpResponse { status: 200, body }),
                calls: Arc::default(),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Ok(HttpResponse {
                    status: 404,
                    body: Vec::new(),
                }),
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl Transport for FixedTransport {
        fn get(&self, _url: &str, _timeout: Duration) -> Result<HttpResponse, TransportError> {
            *self.calls.lock().unwrap() += 1;
            self.reply.clone()
        }
    }

    fn zip_bytes(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, body) in members {
            writer
                .start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn request() -> ArchiveRequest {
        ArchiveRequest {
            url: URL.to_string(),
            ttl: Duration::from_secs(24 * 3600),
            policy: RetryPolicy::immediate(1),
        }
    }

    fn cache(
        dir: &tempfile::TempDir,
        transport: &FixedTransport,
        clock: &Arc<ManualClock>,
    ) -> RawCache {
        let paths = CachePaths::create(dir.path()).unwrap();
        let fetcher = ArchiveFetcher::new(Box::new(transport.clone()));
        RawCache::new(paths, fetcher, clock.clone())
    }

    fn votes_archive() -> Vec<u8> {
        zip_bytes(&[
            ("S1.json", r#"{"scrutin": {"uid": "S1"}}"#),
            ("S2.json", r#"{"scrutin": {"uid": "S2"}}"#),
        ])
    }

    #[test]
    fn test_valid_hit_skips_network() {
        let dir = tempfile::TempDir::new().unwrap();
        let transport = FixedTransport::serving(votes_archive());
        let clock = Arc::new(ManualClock::new(SystemTime::now()));
        let cache = cache(&dir, &transport, &clock);

        assert_eq!(cache.get_or_fetch(&request()).len(), 2);
        assert!(cache.is_valid(&request()));
        assert_eq!(cache.get_or_fetch(&request()).len(), 2);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_entry_records_fetch_time() {
        let dir = tempfile::TempDir::new().unwrap();
        let transport = FixedTransport::serving(votes_archive());
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let clock = Arc::new(ManualClock::new(start));
        let cache = cache(&dir, &transport, &clock);

        cache.get_or_fetch(&request());
        clock.advance(Duration::from_secs(3600));

        let entry = cache.read(URL).unwrap();
        assert_eq!(entry.fetched_at, DateTime::<Utc>::from(start));
        assert_eq!(entry.documents.len(), 2);
        assert_eq!(cache.get_or_fetch(&request()).len(), 2);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_stale_entry_is_refetched() {
        let dir = tempfile::TempDir::new().unwrap();
        let transport = FixedTransport::serving(votes_archive());
        let clock = Arc::new(ManualClock::new(SystemTime::now()));
        let cache = cache(&dir, &transport, &clock);

        cache.get_or_fetch(&request());
        clock.advance(Duration::from_secs(25 * 3600));
        assert!(!cache.is_valid(&request()));

        cache.get_or_fetch(&request());
        assert_eq!(transport.calls(), 2);
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let dir = tempfile::TempDir::new().unwrap();
        let transport = FixedTransport::serving(votes_archive());
        let clock = Arc::new(ManualClock::new(SystemTime::now()));
        let cache = cache(&dir, &transport, &clock);

        let entry = CachePaths::create(dir.path()).unwrap().raw_entry(URL);
        std::fs::write(&entry, b"{truncated").unwrap();

        let documents = cache.get_or_fetch(&request());
        assert_eq!(documents.len(), 2);
        assert_eq!(transport.calls(), 1);
        let rewritten: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&entry).unwrap()).unwrap();
        assert_eq!(rewritten["url"], URL);
    }

    #[test]
    fn test_failed_fetch_is_empty_and_keeps_old_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let clock = Arc::new(ManualClock::new(SystemTime::now()));
        let good = FixedTransport::serving(votes_archive());
        cache(&dir, &good, &clock).get_or_fetch(&request());

        let entry = CachePaths::create(dir.path()).unwrap().raw_entry(URL);
        let before = std::fs::read(&entry).unwrap();

        clock.advance(Duration::from_secs(25 * 3600));
        let bad = FixedTransport::failing();
        let cache = cache(&dir, &bad, &clock);
        assert!(cache.get_or_fetch(&request()).is_empty());
        assert!(cache.try_get_or_fetch(&request()).is_err());
        assert_eq!(std::fs::read(&entry).unwrap(), before);
    }

    #[test]
    fn test_empty_archive_is_not_cached() {
        let dir = tempfile::TempDir::new().unwrap();
        let transport = FixedTransport::serving(zip_bytes(&[("notes.txt", "nothing")]));
        let clock = Arc::new(ManualClock::new(SystemTime::now()));
        let cache = cache(&dir, &transport, &clock);

        assert!(cache.get_or_fetch(&request()).is_empty());
        assert!(!cache.is_valid(&request()));
    }
}
