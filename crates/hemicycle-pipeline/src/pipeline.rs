//! The pipeline service: one object holding configuration and both cache tiers

use crate::activity::compute_activity;
use crate::stats::{deputy_statistics, vote_statistics, DeputyStatistics, VoteStatistics};
use crate::PipelineError;
use anyhow::Context;
use chrono::{DateTime, Utc};
use hemicycle_cache::{
    ArchiveRequest, CacheInfo, CacheKey, CachePaths, DerivedCache, RawCache, TableRecord,
};
use hemicycle_core::{
    ActivityStat, Amendment, Bill, Clock, Config, Dataset, DebateSummary, Deputy, Document,
    Paragraph, SystemClock, Vote,
};
use hemicycle_fetch::{ArchiveFetcher, ReqwestTransport, RetryPolicy, Sleeper, ThreadSleeper, Transport};
use hemicycle_normalize::{
    count_votes, normalize_amendments, normalize_bills, normalize_deputies, normalize_votes,
};
use hemicycle_transcript::{full_text, list_debates, TextAnalyzer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Rows materialized per dataset by [`Pipeline::warm`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WarmReport {
    pub legislature: u32,
    pub rows: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub deputies: DeputyStatistics,
    pub votes: VoteStatistics,
}

pub struct Pipeline {
    config: Config,
    paths: CachePaths,
    raw: RawCache,
    derived: DerivedCache,
    clock: Arc<dyn Clock>,
}

impl Pipeline {
    /// Production wiring: HTTP transport, real sleeps, system clock.
    /// Fails only when the cache directories cannot be created.
    pub fn new(config: Config, cache_root: &Path) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(&config.fetch.user_agent)
            .context("failed to build HTTP client")?;
        Self::with_parts(
            config,
            cache_root,
            Box::new(transport),
            Box::new(ThreadSleeper),
            Arc::new(SystemClock),
        )
    }

    pub fn with_parts(
        config: Config,
        cache_root: &Path,
        transport: Box<dyn Transport>,
        sleeper: Box<dyn Sleeper>,
        clock: Arc<dyn Clock>,
    ) -> anyhow::Result<Self> {
        let paths = CachePaths::create(cache_root).with_context(|| {
            format!("failed to create cache directory {}", cache_root.display())
        })?;
        let fetcher = ArchiveFetcher::with_sleeper(transport, sleeper);
        let raw = RawCache::new(paths.clone(), fetcher, clock.clone());
        let derived = DerivedCache::new(paths.clone(), config.cache.ttl(), clock.clone());
        tracing::debug!(root = %cache_root.display(), "pipeline ready");
        Ok(Self {
            config,
            paths,
            raw,
            derived,
            clock,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_deputies(&self, legislature: u32) -> Vec<Deputy> {
        soft(Dataset::Deputies, self.try_deputies(legislature))
    }

    pub fn get_bills(&self, legislature: u32, limit: Option<usize>) -> Vec<Bill> {
        soft(Dataset::Bills, self.try_bills(legislature, limit))
    }

    pub fn get_votes(&self, legislature: u32, limit: Option<usize>) -> Vec<Vote> {
        soft(Dataset::Votes, self.try_votes(legislature, limit))
    }

    pub fn get_amendments(&self, legislature: u32, limit: Option<usize>) -> Vec<Amendment> {
        soft(Dataset::Amendments, self.try_amendments(legislature, limit))
    }

    pub fn get_debates_list(&self, legislature: u32, limit: Option<usize>) -> Vec<DebateSummary> {
        soft(Dataset::Debates, self.try_debates(legislature, limit))
    }

    /// Paragraphs of one debate, from the long-lived transcript archive entry
    pub fn get_debate_full_text(&self, uid: &str, legislature: u32) -> Vec<Paragraph> {
        match self.documents(Dataset::Debates, legislature, None) {
            Ok(documents) => full_text(&documents, uid),
            Err(e) => {
                tracing::warn!(uid, error = %e, "transcript archive unavailable");
                Vec::new()
            }
        }
    }

    /// Run a text analyzer over one debate's paragraphs
    pub fn analyze_debate<A: TextAnalyzer>(
        &self,
        analyzer: &A,
        uid: &str,
        legislature: u32,
    ) -> A::Output {
        analyzer.analyze(&self.get_debate_full_text(uid, legislature))
    }

    /// Activity over every amendment of the legislature
    pub fn activity(&self, legislature: u32) -> Vec<ActivityStat> {
        let deputies = self.get_deputies(legislature);
        let amendments = self.get_amendments(legislature, None);
        compute_activity(&deputies, &amendments)
    }

    /// Vote records in the archive, without materializing the vote table
    pub fn vote_count(&self, legislature: u32) -> usize {
        match self.documents(Dataset::Votes, legislature, None) {
            Ok(documents) => count_votes(&documents),
            Err(e) => {
                tracing::warn!(legislature, error = %e, "vote archive unavailable");
                0
            }
        }
    }

    pub fn statistics(&self, legislature: u32) -> Statistics {
        let today = DateTime::<Utc>::from(self.clock.now()).date_naive();
        Statistics {
            deputies: deputy_statistics(&self.get_deputies(legislature), today),
            votes: vote_statistics(&self.get_votes(legislature, None)),
        }
    }

    /// Materialize every dataset with no limit
    pub fn warm(&self, legislature: u32) -> WarmReport {
        let mut rows = BTreeMap::new();
        for dataset in Dataset::ALL {
            let count = match dataset {
                Dataset::Deputies => self.get_deputies(legislature).len(),
                Dataset::Bills => self.get_bills(legislature, None).len(),
                Dataset::Votes => self.get_votes(legislature, None).len(),
                Dataset::Amendments => self.get_amendments(legislature, None).len(),
                Dataset::Debates => self.get_debates_list(legislature, None).len(),
            };
            tracing::info!(dataset = %dataset, rows = count, "warmed");
            rows.insert(dataset.name().to_string(), count);
        }
        WarmReport { legislature, rows }
    }

    pub fn info(&self) -> CacheInfo {
        self.paths.info()
    }

    pub fn clear(&self) -> std::io::Result<()> {
        self.paths.clear()
    }

    pub fn try_deputies(&self, legislature: u32) -> Result<Vec<Deputy>, PipelineError> {
        self.table(Dataset::Deputies, legislature, None, normalize_deputies)
    }

    pub fn try_bills(
        &self,
        legislature: u32,
        limit: Option<usize>,
    ) -> Result<Vec<Bill>, PipelineError> {
        self.table(Dataset::Bills, legislature, limit, |docs| {
            normalize_bills(docs, legislature)
        })
    }

    pub fn try_votes(
        &self,
        legislature: u32,
        limit: Option<usize>,
    ) -> Result<Vec<Vote>, PipelineError> {
        self.table(Dataset::Votes, legislature, limit, |docs| {
            normalize_votes(docs, legislature)
        })
    }

    pub fn try_amendments(
        &self,
        legislature: u32,
        limit: Option<usize>,
    ) -> Result<Vec<Amendment>, PipelineError> {
        self.table(Dataset::Amendments, legislature, limit, |docs| {
            normalize_amendments(docs, legislature)
        })
    }

    pub fn try_debates(
        &self,
        legislature: u32,
        limit: Option<usize>,
    ) -> Result<Vec<DebateSummary>, PipelineError> {
        let settings = &self.config.transcript;
        self.table(Dataset::Debates, legislature, limit, |docs| {
            list_debates(docs, settings)
        })
    }

    fn request(&self, dataset: Dataset, legislature: u32) -> ArchiveRequest {
        let transcript = dataset.is_transcript();
        ArchiveRequest {
            url: dataset.url(&self.config.base_url, legislature),
            ttl: if transcript {
                self.config.cache.transcript_ttl()
            } else {
                self.config.cache.ttl()
            },
            policy: RetryPolicy::from_settings(&self.config.fetch, transcript),
        }
    }

    /// Archive members, truncated to `limit` before any normalization
    fn documents(
        &self,
        dataset: Dataset,
        legislature: u32,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, PipelineError> {
        let mut documents = self
            .raw
            .try_get_or_fetch(&self.request(dataset, legislature))?;
        if let Some(limit) = limit {
            documents.truncate(limit);
        }
        Ok(documents)
    }

    fn table<T, F>(
        &self,
        dataset: Dataset,
        legislature: u32,
        limit: Option<usize>,
        normalize: F,
    ) -> Result<Vec<T>, PipelineError>
    where
        T: TableRecord,
        F: FnOnce(&[Document]) -> Vec<T>,
    {
        let key = CacheKey::new(legislature, dataset, limit);
        self.derived.materialize(&key, || {
            let documents = self.documents(dataset, legislature, limit)?;
            Ok(normalize(&documents))
        })
    }
}

fn soft<T>(dataset: Dataset, result: Result<Vec<T>, PipelineError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(dataset = %dataset, error = %e, "returning empty table");
        Vec::new()
    })
}
