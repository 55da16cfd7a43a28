//! Search orchestration
//!
//! Glue across the core components: cache lookup, single-flight fetch on a
//! miss, ranking, pagination, and projection into the response shape.

use crate::cache::DatasetCache;
use crate::error::{Result, ScoutError};
use crate::fetcher::{DatasetFetcher, FetchError};
use crate::types::{CachedDataset, PageResponse, SearchQuery, MAX_PAGES};
use crate::validator::ValidatedRequest;
use crate::{mapper, paginator, ranker};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

type InflightCell = Arc<OnceCell<Arc<CachedDataset>>>;

/// Answers validated search requests
///
/// The only shared mutable state is the injected cache and the in-flight
/// table used to coalesce concurrent misses for the same key into a single
/// provider fetch.
pub struct SearchService {
    fetcher: Arc<dyn DatasetFetcher>,
    cache: Arc<dyn DatasetCache>,
    inflight: Mutex<HashMap<SearchQuery, InflightCell>>,
}

impl SearchService {
    /// Create a service over a fetcher and a cache
    pub fn new(fetcher: Arc<dyn DatasetFetcher>, cache: Arc<dyn DatasetCache>) -> Self {
        Self {
            fetcher,
            cache,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Serve one page of ranked profiles for a validated request
    pub async fn search(&self, request: ValidatedRequest) -> Result<PageResponse> {
        let dataset = self.dataset_for(&request.query, request.page_size).await?;

        let ranked = ranker::rank(dataset.records(), &request.query);
        let page = paginator::slice(&ranked, request.page, request.page_size)?;
        let profiles = page.iter().map(mapper::project).collect();

        Ok(PageResponse {
            profiles,
            total: dataset.total(),
            current_page: request.page,
            total_pages: MAX_PAGES,
        })
    }

    /// Get the snapshot for a query, fetching it at most once
    ///
    /// Concurrent misses for one key share a single in-flight fetch. A
    /// failed fetch caches nothing and clears the in-flight slot, so a
    /// later request retries.
    async fn dataset_for(
        &self,
        query: &SearchQuery,
        page_size: usize,
    ) -> Result<Arc<CachedDataset>> {
        if let Some(dataset) = self.cache.get(query).await {
            debug!("Cache hit for '{}'", query);
            return Ok(dataset);
        }

        let cell = {
            let mut inflight = self.inflight.lock();
            inflight.entry(query.clone()).or_default().clone()
        };

        let result = cell
            .get_or_try_init(|| self.fetch_and_store(query, page_size))
            .await
            .cloned();

        self.inflight.lock().remove(query);

        result
    }

    async fn fetch_and_store(
        &self,
        query: &SearchQuery,
        page_size: usize,
    ) -> Result<Arc<CachedDataset>> {
        // A flight that completed between our cache check and taking the
        // slot must not be repeated.
        if let Some(dataset) = self.cache.get(query).await {
            return Ok(dataset);
        }

        let limit = MAX_PAGES.saturating_mul(page_size);
        info!("Cache miss for '{}', fetching up to {} records", query, limit);

        let records = self
            .fetcher
            .fetch(query.as_str(), limit)
            .await
            .map_err(|e| translate(e, query))?;

        let dataset = Arc::new(CachedDataset::new(records));
        self.cache.put(query.clone(), dataset.clone()).await;

        info!("Cached {} records for '{}'", dataset.total(), query);
        Ok(dataset)
    }
}

/// Map a typed fetch failure into the service error taxonomy
fn translate(err: FetchError, query: &SearchQuery) -> ScoutError {
    match err {
        FetchError::Timeout => ScoutError::timeout(format!("search for '{query}'")),
        FetchError::Authentication(message) => ScoutError::auth(message),
        FetchError::NoResultSet => {
            ScoutError::upstream(format!("no result container for '{query}'"))
        }
        FetchError::EmptyResult => ScoutError::no_results(query.as_str()),
        FetchError::Other(message) => ScoutError::internal(message),
    }
}
