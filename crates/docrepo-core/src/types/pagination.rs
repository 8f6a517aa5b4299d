//! Page metadata returned by `paginate`.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of page metadata for a query.
///
/// Computed once from `(page, limit, total_docs)`. The page index is taken
/// as given: `has_next_page` compares against `total_pages` while
/// `has_prev_page` treats page 1 as the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// The requested page.
    pub page: u64,
    /// Number of entities per page.
    pub limit: u64,
    /// Number of entities matching the query.
    pub total_docs: u64,
    /// `ceil(total_docs / limit)`.
    pub total_pages: u64,
    /// Whether `page < total_pages`.
    pub has_next_page: bool,
    /// `page + 1` when there is a next page.
    pub next_page: Option<u64>,
    /// Whether `page > 1`.
    pub has_prev_page: bool,
    /// `page - 1` when there is a previous page.
    pub prev_page: Option<u64>,
}

impl Pagination {
    /// Compute page metadata. A zero `limit` is treated as 1.
    pub fn new(page: u64, limit: u64, total_docs: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total_docs.div_ceil(limit);
        let has_next_page = page < total_pages;
        let has_prev_page = page > 1;

        Self {
            page,
            limit,
            total_docs,
            total_pages,
            has_next_page,
            next_page: has_next_page.then(|| page + 1),
            has_prev_page,
            prev_page: has_prev_page.then(|| page - 1),
        }
    }
}
