//! Page slicing and pagination metadata

use serde::Serialize;

/// One page of a filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// Items on the requested page, empty past the last page
    pub items: &'a [T],

    /// Always at least 1
    pub total_pages: usize,
}

/// Number of pages for `count` items, never less than 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice out 1-indexed `page` of `items`
///
/// A page size of 0 is treated as 1. Page 0 and pages past the end yield
/// an empty slice instead of failing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    let items = match page.checked_sub(1) {
        Some(index) if page <= total_pages => {
            let start = (index * page_size).min(items.len());
            let end = (start + page_size).min(items.len());
            &items[start..end]
        }
        _ => &items[..0],
    };

    Page { items, total_pages }
}

/// Paginated response structure
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
