//! Pagination envelope.

use serde::{Deserialize, Serialize};

/// A page of results as returned by the paginated list endpoints.
///
/// Not every list endpoint uses this envelope; some return a bare JSON
/// array. Each client operation is typed with the shape its endpoint
/// actually returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in backend order.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Requested page size.
    #[serde(default)]
    pub size: u32,
    /// Zero-based page number.
    #[serde(default)]
    pub number: u32,
}

impl<T> Page<T> {
    /// Consume the envelope and keep only its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size: 0,
            number: 0,
        }
    }
}
