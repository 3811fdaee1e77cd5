//! Pagination types for listing queries.
//!
//! Unlike HTTP-level pagination, these types do not clamp or default their
//! inputs: whatever the boundary layer resolved is passed to the store as-is.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub limit: i64,
}

impl PageRequest {
    /// Create a new page request. Values are kept verbatim.
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Number of rows to skip, `(page - 1) * limit`.
    ///
    /// Saturates instead of overflowing; may be negative for non-positive
    /// pages, which stores are expected to reject or treat as empty.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Whether the request can address any rows at all.
    pub fn is_addressable(&self) -> bool {
        self.page >= 1 && self.limit >= 1
    }
}

/// One page of results together with the total count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Requested page number.
    pub page: i64,
    /// Requested page size.
    pub limit: i64,
}

impl<T: Serialize> Page<T> {
    /// Create a new page.
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }
}
