//! Request parameter validation
//!
//! Validation runs before anything else touches a request; the external
//! provider is never contacted on invalid input.

use crate::error::{Result, ScoutError};
use crate::types::{
    SearchQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGES, SUPPORTED_PLATFORM, WILDCARD_QUERY,
};

/// Largest accepted page size; anything past this cannot be multiplied by
/// [`MAX_PAGES`] without overflowing the fetch limit
pub const MAX_PAGE_SIZE: usize = usize::MAX / MAX_PAGES;

/// Raw request parameters exactly as they arrive on the query string
#[derive(Debug, Clone, Default)]
pub struct RawSearchParams {
    pub query: Option<String>,
    pub platform: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Normalized search term
    pub query: SearchQuery,
    /// Requested page, 1-based
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
}

/// Validate and normalize raw search parameters
///
/// # Errors
///
/// Returns [`ScoutError::InvalidParameter`] naming the offending field
/// when: the query is absent, blank, or the wildcard sentinel; the
/// platform is present and is not (case-insensitively) the supported one;
/// page or limit fail to parse as integers >= 1; page exceeds
/// [`MAX_PAGES`].
pub fn validate(params: RawSearchParams) -> Result<ValidatedRequest> {
    let raw_query = params.query.unwrap_or_default();
    let query = SearchQuery::normalize(&raw_query);
    if query.as_str().is_empty() {
        return Err(ScoutError::invalid_parameter(
            "query",
            "query must not be empty",
        ));
    }
    if query.as_str() == WILDCARD_QUERY {
        return Err(ScoutError::invalid_parameter(
            "query",
            "wildcard queries are not supported",
        ));
    }

    if let Some(platform) = params.platform.as_deref() {
        if !platform.eq_ignore_ascii_case(SUPPORTED_PLATFORM) {
            return Err(ScoutError::invalid_parameter(
                "platform",
                format!("unsupported platform '{platform}', expected '{SUPPORTED_PLATFORM}'"),
            ));
        }
    }

    let page = parse_positive(params.page.as_deref(), "page", DEFAULT_PAGE)?;
    if page > MAX_PAGES {
        return Err(ScoutError::invalid_parameter(
            "page",
            format!("page must not exceed {MAX_PAGES}"),
        ));
    }

    let page_size = parse_positive(params.limit.as_deref(), "limit", DEFAULT_PAGE_SIZE)?;
    // Keeps MAX_PAGES * page_size (the fetch limit) within usize.
    if page_size > MAX_PAGE_SIZE {
        return Err(ScoutError::invalid_parameter(
            "limit",
            format!("limit must not exceed {MAX_PAGE_SIZE}"),
        ));
    }

    Ok(ValidatedRequest {
        query,
        page,
        page_size,
    })
}

/// Parse an optional string parameter as an integer >= 1
fn parse_positive(raw: Option<&str>, field: &str, default: usize) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ScoutError::invalid_parameter(
            field,
            format!("{field} must be an integer >= 1, got '{raw}'"),
        )),
    }
}
