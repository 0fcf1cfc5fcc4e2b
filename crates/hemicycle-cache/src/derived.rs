//! Derived tier: normalized tables materialized into one SQLite file per key

use crate::io::{is_fresh, stamp, temp_path};
use crate::table::TableRecord;
use crate::{CacheError, CachePaths};
use chrono::{DateTime, Utc};
use hemicycle_core::{Clock, Dataset};
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// `(legislature, dataset, limit)`; `limit = None` means every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub legislature: u32,
    pub dataset: Dataset,
    pub limit: Option<usize>,
}

impl CacheKey {
    pub fn new(legislature: u32, dataset: Dataset, limit: Option<usize>) -> Self {
        Self {
            legislature,
            dataset,
            limit,
        }
    }

    pub fn file_stem(&self) -> String {
        let limit = match self.limit {
            Some(n) => n.to_string(),
            None => "all".to_string(),
        };
        format!("{}_{}_{}", self.legislature, self.dataset.name(), limit)
    }
}

pub struct DerivedCache {
    paths: CachePaths,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl DerivedCache {
    pub fn new(paths: CachePaths, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { paths, ttl, clock }
    }

    pub fn is_valid(&self, key: &CacheKey) -> bool {
        is_fresh(&self.paths.derived_entry(key), self.ttl, self.clock.now())
    }

    /// Stored table when valid; otherwise run `compute` once and store its rows.
    ///
    /// A failed `compute` leaves any existing entry untouched. Empty tables are
    /// returned but never stored.
    pub fn materialize<T, E, F>(&self, key: &CacheKey, compute: F) -> Result<Vec<T>, E>
    where
        T: TableRecord,
        F: FnOnce() -> Result<Vec<T>, E>,
    {
        let stem = key.file_stem();
        if self.is_valid(key) {
            match self.read::<T>(key) {
                Ok(rows) => {
                    tracing::debug!(key = %stem, rows = rows.len(), "derived cache hit");
                    return Ok(rows);
                }
                Err(e) => {
                    tracing::warn!(key = %stem, error = %e, "unreadable derived entry, recomputing")
                }
            }
        } else {
            tracing::debug!(key = %stem, "derived cache miss");
        }

        let rows = compute()?;
        if rows.is_empty() {
            tracing::warn!(key = %stem, "empty table, not caching");
        } else if let Err(e) = self.write(key, &rows) {
            tracing::warn!(key = %stem, error = %e, "failed to store derived entry");
        } else {
            tracing::info!(key = %stem, rows = rows.len(), "table materialized");
        }
        Ok(rows)
    }

    /// Load a stored table regardless of age
    pub fn read<T: TableRecord>(&self, key: &CacheKey) -> Result<Vec<T>, CacheError> {
        let path = self.paths.derived_entry(key);
        if !path.exists() {
            return Err(CacheError::Corrupt(format!("{} is missing", path.display())));
        }
        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

        let stored: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'table'",
            [],
            |row| row.get(0),
        )?;
        if stored != T::TABLE {
            return Err(CacheError::Corrupt(format!(
                "entry holds table {} instead of {}",
                stored,
                T::TABLE
            )));
        }

        let columns: Vec<&str> = T::COLUMNS.iter().map(|c| c.name).collect();
        let sql = format!(
            "SELECT {} FROM {} ORDER BY rowid",
            columns.join(", "),
            T::TABLE
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| T::from_row(row))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Build the table in a sibling temp file, then rename it over the entry
    pub fn write<T: TableRecord>(&self, key: &CacheKey, rows: &[T]) -> Result<(), CacheError> {
        let path = self.paths.derived_entry(key);
        let temp = temp_path(&path);
        if temp.exists() {
            std::fs::remove_file(&temp)?;
        }

        let built = self
            .build(&temp, key, rows)
            .and_then(|()| stamp(&temp, self.clock.now()).map_err(CacheError::from));
        if let Err(e) = built {
            let _ = std::fs::remove_file(&temp);
            return Err(e);
        }
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn build<T: TableRecord>(
        &self,
        path: &Path,
        key: &CacheKey,
        rows: &[T],
    ) -> Result<(), CacheError> {
        let mut conn = Connection::open(path)?;

        let columns = T::COLUMNS
            .iter()
            .map(|c| format!("{} {}", c.name, c.kind.sql()))
            .collect::<Vec<_>>()
            .join(", ");
        conn.execute_batch(&format!(
            "CREATE TABLE meta (key TEXT PRIMARY KEY, value TEXT NOT NULL);
             CREATE TABLE {} ({});",
            T::TABLE,
            columns
        ))?;

        let written_at = DateTime::<Utc>::from(self.clock.now()).to_rfc3339();
        let tx = conn.transaction()?;
        {
            let mut meta = tx.prepare("INSERT INTO meta (key, value) VALUES (?1, ?2)")?;
            meta.execute(["table", T::TABLE])?;
            meta.execute(["key", key.file_stem().as_str()])?;
            meta.execute(["written_at", written_at.as_str()])?;

            let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
            let mut insert =
                tx.prepare(&format!("INSERT INTO {} VALUES ({})", T::TABLE, placeholders))?;
            for row in rows {
                insert.execute(params_from_iter(row.to_row()))?;
            }
        }
        tx.commit()?;
        conn.close().map_err(|(_, e)| CacheError::Sqlite(e))?;
        Ok(())
    }
}
