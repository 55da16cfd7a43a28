//! Dataset caching
//!
//! One normalized query maps to one immutable dataset snapshot. The store
//! is injected behind [`DatasetCache`] so a different backing store can be
//! substituted without touching ranking or pagination.

use crate::config::CacheConfig;
use crate::types::{CachedDataset, SearchQuery};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;

/// Keyed store of dataset snapshots
///
/// Once a dataset is cached for a key, later requests for that key must
/// never trigger another fetch for the lifetime of the process.
#[async_trait]
pub trait DatasetCache: Send + Sync {
    /// Look up the snapshot for a normalized query
    async fn get(&self, key: &SearchQuery) -> Option<Arc<CachedDataset>>;

    /// Store a snapshot unconditionally
    async fn put(&self, key: SearchQuery, dataset: Arc<CachedDataset>);
}

/// Moka-backed dataset cache
///
/// Built without a TTL; entries live for the process lifetime unless a
/// capacity bound is configured.
pub struct MokaDatasetCache {
    cache: Cache<SearchQuery, Arc<CachedDataset>>,
}

impl MokaDatasetCache {
    /// Create a cache from configuration
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = Cache::builder();
        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }
        Self {
            cache: builder.build(),
        }
    }

    /// Create an unbounded cache
    pub fn unbounded() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl Default for MokaDatasetCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[async_trait]
impl DatasetCache for MokaDatasetCache {
    async fn get(&self, key: &SearchQuery) -> Option<Arc<CachedDataset>> {
        self.cache.get(key).await
    }

    async fn put(&self, key: SearchQuery, dataset: Arc<CachedDataset>) {
        self.cache.insert(key, dataset).await;
    }
}

/// Thread-safe shared dataset cache
pub type SharedDatasetCache = Arc<dyn DatasetCache>;
