//! Record store and live snapshot handle
//!
//! A [`RecordStore`] is the normalized, id-descending record set of one
//! fetch. It has no mutating API: a refresh builds a new store and swaps it
//! into the [`SnapshotHandle`] in one step, so readers see either the old
//! snapshot or the new one, never a mix.

use crate::app::models::HikeRecord;
use crate::app::services::csv_parser::parse_table;
use crate::app::services::record_normalizer::{ParseStats, normalize_table};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Immutable snapshot of the hike log
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordStore {
    records: Vec<HikeRecord>,
    stats: ParseStats,
    source: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl RecordStore {
    /// Store with no records (no source configured, or nothing fetched yet)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Run the parser and normalizer over raw sheet text
    pub fn from_text(text: &str) -> Self {
        let table = parse_table(text);
        let result = normalize_table(&table);
        Self {
            records: result.records,
            stats: result.stats,
            source: None,
            fetched_at: None,
        }
    }

    /// Build a store from records that did not come from text
    ///
    /// Records are stable-sorted by id descending to uphold the store order.
    pub fn from_records(mut records: Vec<HikeRecord>) -> Self {
        records.sort_by(|a, b| b.id.cmp(&a.id));
        let stats = ParseStats {
            total_rows: records.len(),
            records_kept: records.len(),
            ..ParseStats::default()
        };
        Self {
            records,
            stats,
            source: None,
            fetched_at: None,
        }
    }

    /// Attach where and when the text was fetched
    pub fn with_provenance(mut self, source: impl Into<String>, fetched_at: DateTime<Utc>) -> Self {
        self.source = Some(source.into());
        self.fetched_at = Some(fetched_at);
        self
    }

    /// Records, most recent hike first
    pub fn records(&self) -> &[HikeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HikeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record carrying a hike number
    pub fn get(&self, id: u64) -> Option<&HikeRecord> {
        self.records.iter().find(|h| h.id == id)
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a HikeRecord;
    type IntoIter = std::slice::Iter<'a, HikeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Shared, swappable pointer to the live record store
///
/// Cloning the handle shares the same slot. Concurrent refreshes are not
/// coordinated; whichever calls [`SnapshotHandle::replace`] last wins.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    inner: Arc<RwLock<Arc<RecordStore>>>,
}

impl SnapshotHandle {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Current snapshot; stays valid even after a later replace
    pub async fn current(&self) -> Arc<RecordStore> {
        self.inner.read().await.clone()
    }

    /// Swap in a new snapshot, returning the previous one
    ///
    /// Callers that need the snapshot they installed should keep their own
    /// `Arc`; reading the slot back may observe a later replace.
    pub async fn replace(&self, store: impl Into<Arc<RecordStore>>) -> Arc<RecordStore> {
        let next = store.into();
        let mut slot = self.inner.write().await;
        debug!("Replacing snapshot: {} -> {} records", slot.len(), next.len());
        std::mem::replace(&mut *slot, next)
    }
}
