//! Scout Core Library
//!
//! Core functionality for the Scout profile search service: request
//! validation, the external-provider fetcher abstraction, the dataset
//! cache, relevance ranking, pagination, and response projection.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod mapper;
pub mod paginator;
pub mod ranker;
pub mod service;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use cache::{DatasetCache, MokaDatasetCache, SharedDatasetCache};
pub use config::{CacheConfig, ProviderConfig, ScoutConfig, ServerSettings};
pub use error::{ErrorCategory, Result, ScoutError};
pub use fetcher::{DatasetFetcher, FetchError, HttpDatasetFetcher};
pub use service::SearchService;
pub use types::{
    CachedDataset, PageResponse, Profile, RawRecord, SearchQuery, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, MAX_PAGES, PLACEHOLDER_AVATAR, SUPPORTED_PLATFORM, WILDCARD_QUERY,
};
pub use validator::{validate, RawSearchParams, ValidatedRequest, MAX_PAGE_SIZE};

/// Initialize logging with JSON formatting
pub fn init_logging() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scout_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    Ok(())
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::new(level);

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        "text" | "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        "compact" => {
            registry
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            return Err(ScoutError::invalid_parameter(
                "log_format",
                format!("unknown log format: {format}"),
            ));
        }
    }

    Ok(())
}
