//! Pagination
//!
//! Page count arithmetic and the window of page buttons around the
//! current page.

/// Page numbers to show as buttons, centered on `page` where possible
/// and clipped (not wrapped) at either end.
pub fn page_window(page: u32, total_pages: u32, width: u32) -> Vec<u32> {
    if total_pages < 1 || width == 0 {
        return Vec::new();
    }

    let mut start = page.saturating_sub(width / 2).max(1);
    let end = total_pages.min(start.saturating_add(width - 1));
    if end.saturating_sub(start) < width - 1 {
        start = end.saturating_sub(width - 1).max(1);
    }

    (start..=end).collect()
}

/// `ceil(count / page_size)`, never less than one page.
pub fn total_pages(count: u32, page_size: u32) -> u32 {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Page number from a `?page=` query value; anything unusable means page 1.
pub fn page_from_query(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Current position within a paged listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-indexed current page
    pub page: u32,
    pub total_pages: u32,
}

impl PaginationState {
    pub fn new(page: u32, count: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            total_pages: total_pages(count, page_size),
        }
    }

    pub fn window(&self, width: u32) -> Vec<u32> {
        page_window(self.page, self.total_pages, width)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
