//! HTTP handlers for the Scout serve crate
//!
//! The search handler is a thin shell: extract raw parameters, hand them
//! to the core, and map the outcome onto HTTP statuses. Every failure is
//! logged before it is converted into the public `{ "error": ... }` shape.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use scout_core::{validator, PageResponse, RawSearchParams, ScoutError, SearchService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SearchService>,
    pub config: crate::ServerConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(service: Arc<SearchService>, config: crate::ServerConfig) -> Self {
        Self { service, config }
    }
}

/// Query parameters for the search endpoint
///
/// Page and limit stay strings here; the core validator owns parsing so
/// unparseable values produce the service's own 400 shape instead of an
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub platform: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<SearchParams> for RawSearchParams {
    fn from(params: SearchParams) -> Self {
        Self {
            query: params.query,
            platform: params.platform,
            page: params.page,
            limit: params.limit,
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// HTTP-facing wrapper for core errors
#[derive(Debug)]
pub struct ApiError(pub ScoutError);

impl From<ScoutError> for ApiError {
    fn from(err: ScoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ScoutError::InvalidParameter { .. } => {
                warn!("Rejected request: {}", self.0);
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            ScoutError::AuthenticationFailure { .. } => {
                error!("Upstream authentication failure: {}", self.0);
                (StatusCode::UNAUTHORIZED, self.0.to_string())
            }
            ScoutError::NoResults { .. } | ScoutError::NoResultsForPage { .. } => {
                info!("Empty result: {}", self.0);
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            ScoutError::UpstreamUnavailable { .. } => {
                error!("Upstream unavailable: {}", self.0);
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            ScoutError::UpstreamTimeout { .. } => {
                error!("Upstream timeout: {}", self.0);
                (StatusCode::GATEWAY_TIMEOUT, self.0.to_string())
            }
            _ => {
                error!("Internal error during search: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

/// GET search handler
///
/// # Query Parameters
///
/// - `query`: search term (required, not the wildcard sentinel)
/// - `platform`: optional, case-insensitive match to the supported platform
/// - `page`: optional page number, 1 to 7 (default 1)
/// - `limit`: optional page size >= 1 (default 5)
///
/// # Responses
///
/// - 200 with `{ profiles, total, currentPage, totalPages }`
/// - 400 validation failure, 401 provider auth failure, 404 no results,
///   502 no result container, 504 provider timeout, 500 anything else
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PageResponse>, ApiError> {
    info!(
        "GET search request: query={:?}, platform={:?}, page={:?}, limit={:?}",
        params.query, params.platform, params.page, params.limit
    );

    let request = validator::validate(params.into())?;
    let response = state.service.search(request).await?;

    info!(
        "GET search completed: {} profiles on page {} of {}",
        response.profiles.len(),
        response.current_page,
        response.total_pages
    );

    Ok(Json(response))
}
