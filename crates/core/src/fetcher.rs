//! Dataset retrieval from the external profile provider
//!
//! The core only ever sees [`DatasetFetcher`] and the closed
//! [`FetchError`] set; callers switch on error kind, never on message
//! text. [`HttpDatasetFetcher`] is the production implementation.

use crate::config::ProviderConfig;
use crate::types::RawRecord;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure kinds a fetch can produce
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider did not answer within the configured timeout
    #[error("provider request timed out")]
    Timeout,

    /// The provider rejected the supplied credential
    #[error("provider rejected credentials: {0}")]
    Authentication(String),

    /// The provider answered without a retrievable result container
    #[error("provider returned no result container")]
    NoResultSet,

    /// The provider's result container held zero items
    #[error("provider returned an empty result set")]
    EmptyResult,

    /// Anything else that went wrong on the wire
    #[error("provider request failed: {0}")]
    Other(String),
}

/// Retrieves the raw result set for a query
///
/// `limit` is the total number of items to retrieve, fetched from offset
/// zero. The call may take multiple seconds; it is one network round trip
/// to an external system.
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawRecord>, FetchError>;
}

/// Provider search response envelope
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    users: Option<Vec<RawRecord>>,
}

/// HTTP implementation of [`DatasetFetcher`]
#[derive(Debug, Clone)]
pub struct HttpDatasetFetcher {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpDatasetFetcher {
    /// Create a fetcher from provider configuration
    ///
    /// The credential comes from injected configuration; it is never
    /// embedded in source.
    pub fn new(config: &ProviderConfig) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// The provider base URL this fetcher talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DatasetFetcher for HttpDatasetFetcher {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawRecord>, FetchError> {
        let url = format!("{}/v1/search/users", self.base_url);

        debug!("Fetching up to {} records for '{}' from {}", limit, query, url);

        let count = limit.to_string();
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("keyword", query), ("count", count.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Other(format!("request failed: {e}"))
                }
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                warn!("Provider rejected credentials: {}", body);
                return Err(FetchError::Authentication(body));
            }
            status if !status.is_success() => {
                return Err(FetchError::Other(format!(
                    "provider answered HTTP {status}"
                )));
            }
            _ => {}
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Other(format!("failed to parse provider response: {e}")))?;

        let Some(users) = envelope.users else {
            return Err(FetchError::NoResultSet);
        };
        if users.is_empty() {
            return Err(FetchError::EmptyResult);
        }

        debug!("Fetched {} records for '{}'", users.len(), query);
        Ok(users)
    }
}
