//! Error handling for the Scout core library

use std::fmt;
use thiserror::Error;

/// Result type alias for Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Main error type for Scout operations
///
/// Each variant corresponds to one user-facing failure class; the HTTP
/// layer maps variants to status codes without inspecting message text.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// A request parameter failed validation
    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },

    /// The external provider rejected our credentials
    #[error("provider authentication failed: {message}")]
    AuthenticationFailure { message: String },

    /// The provider produced zero results for a query
    #[error("no results found for '{query}'")]
    NoResults { query: String },

    /// The cached dataset has no items for the requested page
    #[error("no results available for page {page}")]
    NoResultsForPage { page: usize },

    /// The provider produced no usable result container
    #[error("provider returned no result set: {message}")]
    UpstreamUnavailable { message: String },

    /// The call to the provider timed out
    #[error("provider request timed out: {message}")]
    UpstreamTimeout { message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl ScoutError {
    /// Create an invalid-parameter error
    pub fn invalid_parameter<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an authentication error
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::AuthenticationFailure {
            message: message.into(),
        }
    }

    /// Create a no-results error
    pub fn no_results<S: Into<String>>(query: S) -> Self {
        Self::NoResults {
            query: query.into(),
        }
    }

    /// Create a no-results-for-page error
    pub fn no_results_for_page(page: usize) -> Self {
        Self::NoResultsForPage { page }
    }

    /// Create an upstream-unavailable error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    /// Create an upstream-timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::UpstreamTimeout {
            message: message.into(),
        }
    }

    /// Create an internal error from a plain message
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Generic(anyhow::anyhow!(message.into()))
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamTimeout { .. } | Self::UpstreamUnavailable { .. }
        )
    }

    /// Get error category for logging/metrics
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } => ErrorCategory::Validation,
            Self::AuthenticationFailure { .. } => ErrorCategory::Security,
            Self::NoResults { .. } | Self::NoResultsForPage { .. } => ErrorCategory::NotFound,
            Self::UpstreamUnavailable { .. } => ErrorCategory::Upstream,
            Self::UpstreamTimeout { .. } => ErrorCategory::Timeout,
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Generic(_) => ErrorCategory::Generic,
        }
    }
}

/// Error categories for metrics and logging
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Security,
    NotFound,
    Upstream,
    Timeout,
    Configuration,
    Generic,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Security => write!(f, "security"),
            Self::NotFound => write!(f, "not_found"),
            Self::Upstream => write!(f, "upstream"),
            Self::Timeout => write!(f, "timeout"),
            Self::Configuration => write!(f, "configuration"),
            Self::Generic => write!(f, "generic"),
        }
    }
}
