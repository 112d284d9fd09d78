use serde::Serialize;

/// Fixed number of job cards per page.
pub const PAGE_SIZE: usize = 9;

/// Number of pages needed for `len` filtered records. Zero records means
/// zero pages; the consumer renders no pagination controls in that case.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The contiguous slice for a 1-indexed page, clamped to the sequence bounds.
/// Out-of-range pages yield an empty slice rather than an error.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Clamp a requested page into `[1, max(1, total)]`. Stateless consumers use
/// this where the stateful session would instead ignore the request.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Pagination control metadata handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationView {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            has_prev: total_pages > 0 && current_page > 1,
            has_next: total_pages > 0 && current_page < total_pages,
        }
    }
}
