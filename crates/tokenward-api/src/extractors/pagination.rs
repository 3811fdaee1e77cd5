//! Pagination query parameter extractor.

use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// Query parameters for paginated endpoints.
///
/// A value that is absent or not an integer falls back to `page=1` or
/// `limit=10`, each field on its own. Integers are forwarded as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page", deserialize_with = "page_or_default")]
    pub page: i64,
    /// Items per page (default: 10).
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    pub limit: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn page_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    parse_or(deserializer, DEFAULT_PAGE)
}

fn limit_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    parse_or(deserializer, DEFAULT_LIMIT)
}

fn parse_or<'de, D>(deserializer: D, fallback: i64) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback))
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
