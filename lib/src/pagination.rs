/// One-indexed pagination state of the search screen.
///
/// The total only becomes known after the first successful search; until
/// then [`total_pages`](Self::total_pages) is `None` and page changes are
/// refused. Once the total is known the current page is kept inside
/// `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: Option<u64>,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total: None,
        }
    }

    /// Derived page count: `ceil(total / page_size)`, never below 1, `None`
    /// while the total is unknown.
    pub fn total_pages(&self) -> Option<u32> {
        let size = u64::from(self.page_size.max(1));
        self.total.map(|total| {
            let pages = total.div_ceil(size);
            pages.clamp(1, u64::from(u32::MAX)) as u32
        })
    }

    /// Clamp `page` into the valid range and make it current. Does not issue
    /// a fetch; re-fetching on page change is the caller's responsibility.
    /// No-op while the total is unknown.
    pub fn goto_page(&mut self, page: u32) {
        let Some(total_pages) = self.total_pages() else {
            return;
        };
        self.page = page.clamp(1, total_pages);
    }

    /// Record the total reported by the service, re-clamping the current
    /// page in case the result set shrank.
    pub fn set_total(&mut self, total: u64) {
        self.total = Some(total);
        if let Some(total_pages) = self.total_pages() {
            self.page = self.page.clamp(1, total_pages);
        }
    }

    /// Back to page 1 with the total forgotten.
    pub fn reset(&mut self) {
        self.page = 1;
        self.total = None;
    }
}
