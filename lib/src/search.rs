use crate::error::ApiError;
use crate::models::{BookListing, BuchPage};
use crate::pagination::Pagination;
use crate::query::SearchFilter;

/// The one generic user-facing message for failed searches.
pub const SEARCH_ERROR_MESSAGE: &str = "Backend-Fehler bei der Suche.";

/// Owned state of the search screen: the filter form, the current result
/// page, and the loading/error flags the view renders.
///
/// Responses are applied through a request sequence number handed out by
/// [`begin_search`](Self::begin_search). A response whose number is no longer
/// current is dropped, so when two searches overlap the later one wins no
/// matter which completes first.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub filter: SearchFilter,
    pub books: Vec<BookListing>,
    pub pagination: Pagination,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl SearchState {
    pub fn new(page_size: u32) -> Self {
        Self {
            filter: SearchFilter::default(),
            books: Vec::new(),
            pagination: Pagination::new(page_size),
            loading: false,
            error: None,
            seq: 0,
        }
    }

    /// Mark a search as started: clear the error, raise the loading flag,
    /// and return the sequence number the response must present.
    pub fn begin_search(&mut self) -> u64 {
        self.error = None;
        self.loading = true;
        self.seq += 1;
        self.seq
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Replace the result list and total with a successful response.
    pub fn apply_page(&mut self, seq: u64, page: &BuchPage) {
        if !self.is_current(seq) {
            log::debug!("dropping stale search response (seq {seq})");
            return;
        }
        self.books = page.content.iter().map(BookListing::from).collect();
        self.pagination.set_total(page.total_elements);
        self.loading = false;
    }

    /// The 404 carve-out: an empty result set, not an error.
    pub fn apply_empty(&mut self, seq: u64) {
        if !self.is_current(seq) {
            log::debug!("dropping stale search response (seq {seq})");
            return;
        }
        self.books.clear();
        self.pagination.set_total(0);
        self.loading = false;
    }

    /// Any other failure: one generic message, prior results untouched.
    pub fn apply_failure(&mut self, seq: u64) {
        if !self.is_current(seq) {
            log::debug!("dropping stale search failure (seq {seq})");
            return;
        }
        self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    /// Route a finished request into the matching apply method. Every
    /// outcome lowers the loading flag for the winning sequence.
    pub fn apply_result(&mut self, seq: u64, result: Result<BuchPage, ApiError>) {
        match result {
            Ok(page) => self.apply_page(seq, &page),
            Err(ApiError::NotFound) => self.apply_empty(seq),
            Err(err) => {
                log::error!("search failed: {err}");
                self.apply_failure(seq);
            }
        }
    }

    /// Restore the filter defaults and page 1 and clear results, total, and
    /// error without issuing a request. Bumps the sequence so a response
    /// still in flight cannot repopulate the cleared list.
    pub fn reset(&mut self) {
        self.filter = SearchFilter::default();
        self.pagination.reset();
        self.books.clear();
        self.error = None;
        self.loading = false;
        self.seq += 1;
    }
}
