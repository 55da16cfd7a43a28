//! Core type definitions for Scout

use serde::{Deserialize, Serialize};

/// Fixed number of pages a dataset is sized for.
///
/// The fetch limit is `MAX_PAGES * page_size`, and every response reports
/// `totalPages = MAX_PAGES` regardless of how many items actually came
/// back. This mirrors observed provider-facing behavior and is deliberately
/// not derived from the dataset size.
pub const MAX_PAGES: usize = 7;

/// Default page number when the request omits one
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when the request omits one
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The single platform this service searches
pub const SUPPORTED_PLATFORM: &str = "tiktok";

/// Query sentinel that is rejected rather than treated as "match all"
pub const WILDCARD_QUERY: &str = "*";

/// Fallback profile picture path when the record carries no image URL
pub const PLACEHOLDER_AVATAR: &str = "/images/profile-placeholder.png";

/// Normalized search term, used as the cache key
///
/// Two queries differing only in case or surrounding whitespace are the
/// same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize a raw search term (trim + lowercase)
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalized term
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A profile record as returned by the external provider
///
/// Only the fields Scout ranks and projects are modeled; anything else the
/// provider sends is carried through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Provider identifier, absent for some records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Account username, absent for some records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Profile bio text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// High-definition profile image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_hd: Option<String>,
    /// Standard profile image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Unmodeled provider fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawRecord {
    /// Username lowered for comparisons; a missing username compares as ""
    pub fn normalized_username(&self) -> String {
        self.username
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Immutable snapshot of the records fetched for one query
///
/// Created on first cache miss and never mutated afterwards; `total` is
/// fixed at creation and reported as-is by every later page request, even
/// when that request uses a different page size.
#[derive(Debug, Clone)]
pub struct CachedDataset {
    records: Vec<RawRecord>,
    total: usize,
}

impl CachedDataset {
    /// Snapshot a fetched result set
    pub fn new(records: Vec<RawRecord>) -> Self {
        let total = records.len();
        Self { records, total }
    }

    /// The records in provider order
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Item count at snapshot time
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Public profile shape projected from a raw record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Record identifier, falling back to the username
    pub id: String,
    /// Account username, "" when the record had none
    pub username: String,
    /// Bio text, "" when absent
    pub bio: String,
    /// First available of HD avatar, standard avatar, placeholder path
    pub profile_picture: String,
}

/// One page of ranked profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Profiles for the requested page, in ranked order
    pub profiles: Vec<Profile>,
    /// Full dataset size at first-fetch time
    pub total: usize,
    /// The page that was requested
    pub current_page: usize,
    /// Always [`MAX_PAGES`]
    pub total_pages: usize,
}
