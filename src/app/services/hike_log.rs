//! Refresh service
//!
//! [`HikeLog`] owns the source location, the sheet source and the live
//! snapshot. A refresh fetches the raw text, runs the parser and normalizer,
//! and swaps the result in. A failed fetch leaves the previous snapshot in
//! place and returns the error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hike_log::{Config, HikeLog};
//!
//! # async fn demo() -> hike_log::Result<()> {
//! let log = HikeLog::from_config(&Config::default());
//! let store = log.refresh().await?;
//! println!("{} hikes", store.len());
//! # Ok(())
//! # }
//! ```

use crate::app::adapters::sheet_source::{HttpSheetSource, SheetSource};
use crate::app::services::analytics::Dashboard;
use crate::app::services::record_store::{RecordStore, SnapshotHandle};
use crate::config::{AnalyticsConfig, Config};
use crate::{Error, Result};
use chrono::Utc;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Hike log service: source location plus the live snapshot
#[derive(Clone)]
pub struct HikeLog {
    source: Arc<dyn SheetSource>,
    url: Arc<RwLock<String>>,
    timeout_secs: u64,
    analytics: AnalyticsConfig,
    snapshot: SnapshotHandle,
}

impl std::fmt::Debug for HikeLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HikeLog")
            .field("url", &self.source_url())
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl HikeLog {
    /// Service backed by HTTP, configured from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::with_source(config, Arc::new(HttpSheetSource::new()))
    }

    /// Service backed by any sheet source
    pub fn with_source(config: &Config, source: Arc<dyn SheetSource>) -> Self {
        Self {
            source,
            url: Arc::new(RwLock::new(config.source.url.trim().to_string())),
            timeout_secs: config.source.timeout_secs,
            analytics: config.analytics.clone(),
            snapshot: SnapshotHandle::default(),
        }
    }

    /// Location the next refresh will fetch
    pub fn source_url(&self) -> String {
        self.url
            .read()
            .map(|url| url.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Replace the source location and re-run the pipeline
    ///
    /// The returned store is the one built from `url`, even if another
    /// refresh replaces the live snapshot in the meantime.
    pub async fn set_source_url(&self, url: impl Into<String>) -> Result<Arc<RecordStore>> {
        let url = url.into().trim().to_string();
        info!("Source url set to '{}'", url);
        self.store_url(url.clone());
        self.refresh_from(url).await
    }

    fn store_url(&self, url: String) {
        match self.url.write() {
            Ok(mut slot) => *slot = url,
            Err(poisoned) => *poisoned.into_inner() = url,
        }
    }

    /// Fetch, parse, normalize and swap in a new snapshot
    ///
    /// With no source configured the snapshot becomes empty. On a transport
    /// failure the previous snapshot stays live and the error is returned.
    /// The returned store is the one this call installed.
    pub async fn refresh(&self) -> Result<Arc<RecordStore>> {
        self.refresh_from(self.source_url()).await
    }

    async fn refresh_from(&self, url: String) -> Result<Arc<RecordStore>> {
        if url.is_empty() {
            info!("No source configured, clearing snapshot");
            return Ok(self.install(RecordStore::empty()).await);
        }

        let start = Instant::now();
        info!("Refreshing hike log from {}", url);

        let text = match self.fetch(&url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Refresh failed, keeping previous snapshot: {}", e);
                return Err(e);
            }
        };

        let store = RecordStore::from_text(&text).with_provenance(url.as_str(), Utc::now());
        info!(
            "Refresh complete: {} hikes in {:.2?}",
            store.len(),
            start.elapsed()
        );

        Ok(self.install(store).await)
    }

    async fn install(&self, store: RecordStore) -> Arc<RecordStore> {
        let store = Arc::new(store);
        self.snapshot.replace(Arc::clone(&store)).await;
        store
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let source = Arc::clone(&self.source);
        let location = url.to_string();
        let task = tokio::task::spawn_blocking(move || source.fetch(&location));

        let joined = if self.timeout_secs == 0 {
            task.await
        } else {
            tokio::time::timeout(Duration::from_secs(self.timeout_secs), task)
                .await
                .map_err(|_| Error::timeout(url, self.timeout_secs))?
        };

        joined.map_err(|e| Error::transport(url, format!("fetch task failed: {e}")))?
    }

    /// Live snapshot; empty until the first successful refresh
    pub async fn snapshot(&self) -> Arc<RecordStore> {
        self.snapshot.current().await
    }

    /// Shared handle to the live snapshot
    pub fn snapshot_handle(&self) -> &SnapshotHandle {
        &self.snapshot
    }

    pub fn analytics(&self) -> &AnalyticsConfig {
        &self.analytics
    }

    /// Every derived view of the live snapshot
    pub async fn dashboard(&self) -> Dashboard {
        let store = self.snapshot().await;
        debug!("Computing dashboard over {} records", store.len());
        Dashboard::compute(&store, &self.analytics)
    }
}
