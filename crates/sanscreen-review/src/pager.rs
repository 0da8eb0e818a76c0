//! # Review Pager
//!
//! Pagination and filter state for one batch detail view. The pager owns
//! two contract rules:
//!
//! - any filter change resets the page to 0, and
//! - the derived query parameters never carry an empty search string.
//!
//! Page-boundary arithmetic mirrors the view contract exactly: "Next" is
//! available iff `(page + 1) * rows_per_page < total`, "Previous" iff
//! `page > 0`.

use sanscreen_core::{BatchId, MatchStatus};

use sanscreen_client::BatchDetailParams;

/// Default page size of the batch detail view.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 20;

/// Pagination and filter state for one batch's result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPager {
    batch_id: BatchId,
    page: u32,
    rows_per_page: u32,
    status: Option<MatchStatus>,
    search: String,
}

impl ReviewPager {
    /// State for a freshly opened batch: page 0, default page size, the
    /// PENDING filter (review starts with the unreviewed), no search.
    pub fn new(batch_id: BatchId) -> Self {
        Self {
            batch_id,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            status: Some(MatchStatus::Pending),
            search: String::new(),
        }
    }

    /// The batch this pager belongs to.
    pub fn batch_id(&self) -> BatchId {
        self.batch_id
    }

    /// Current 0-based page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Current page size.
    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    /// Current status filter; `None` means all statuses.
    pub fn status(&self) -> Option<MatchStatus> {
        self.status
    }

    /// Current search text, as typed (trimming happens at the wire).
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the status filter and reset to page 0.
    pub fn set_status(&mut self, status: Option<MatchStatus>) {
        self.status = status;
        self.page = 0;
    }

    /// Replace the search text and reset to page 0.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    /// Replace the page size and reset to page 0. A size of 0 is clamped
    /// to 1 so offset arithmetic stays defined.
    pub fn set_rows_per_page(&mut self, rows_per_page: u32) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    /// Whether a next page exists for the given total.
    pub fn can_next(&self, total: u64) -> bool {
        (u64::from(self.page) + 1) * u64::from(self.rows_per_page) < total
    }

    /// Whether a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    /// Advance one page if the total allows it. Returns whether it moved.
    pub fn next_page(&mut self, total: u64) -> bool {
        if self.can_next(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Step back one page. Returns whether it moved.
    pub fn prev_page(&mut self) -> bool {
        if self.can_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a specific page without bounds knowledge; the caller is
    /// expected to have checked against the current total.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Number of pages for the given total (0 when the filter matches
    /// nothing).
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.rows_per_page))
    }

    /// Row offset of the current page start.
    pub fn offset(&self) -> u32 {
        self.page * self.rows_per_page
    }

    /// The wire parameters for the current state. The search text is
    /// trimmed here; a blank search becomes `None` and is never sent.
    pub fn params(&self) -> BatchDetailParams {
        let trimmed = self.search.trim();
        BatchDetailParams {
            limit: self.rows_per_page,
            offset: self.offset(),
            status: self.status,
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// Cache key covering every parameter. Two pagers produce the same key
    /// iff they would issue the same request, so a snapshot can never be
    /// shown for a filter combination it was not fetched for.
    pub fn query_key(&self) -> String {
        let status = self.status.map(|s| s.as_wire()).unwrap_or("ALL");
        format!(
            "batch/{}?limit={}&offset={}&status={}&search={}",
            self.batch_id,
            self.rows_per_page,
            self.offset(),
            status,
            self.search.trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager() -> ReviewPager {
        ReviewPager::new(BatchId::new(3))
    }

    #[test]
    fn fresh_pager_defaults() {
        let p = pager();
        assert_eq!(p.page(), 0);
        assert_eq!(p.rows_per_page(), 20);
        assert_eq!(p.status(), Some(MatchStatus::Pending));
        assert_eq!(p.search(), "");
    }

    #[test]
    fn status_change_resets_page() {
        let mut p = pager();
        p.next_page(100);
        assert_eq!(p.page(), 1);
        p.set_status(Some(MatchStatus::Revisit));
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn search_change_resets_page() {
        let mut p = pager();
        p.next_page(100);
        p.set_search("novak");
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn rows_per_page_change_resets_page() {
        let mut p = pager();
        p.next_page(100);
        p.set_rows_per_page(50);
        assert_eq!(p.page(), 0);
        assert_eq!(p.rows_per_page(), 50);
    }

    #[test]
    fn rows_per_page_zero_is_clamped() {
        let mut p = pager();
        p.set_rows_per_page(0);
        assert_eq!(p.rows_per_page(), 1);
    }

    #[test]
    fn next_disabled_iff_page_covers_total() {
        let mut p = pager();
        // total=45, rows=20: pages 0,1,2.
        assert!(p.can_next(45));
        assert!(p.next_page(45));
        assert!(p.next_page(45));
        assert_eq!(p.page(), 2);
        assert!(!p.can_next(45), "(2+1)*20 >= 45 disables Next");
        assert!(!p.next_page(45));
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn next_disabled_on_exact_boundary() {
        let mut p = pager();
        // total=40, rows=20: exactly two pages.
        assert!(p.next_page(40));
        assert!(!p.can_next(40), "(1+1)*20 >= 40 disables Next");
    }

    #[test]
    fn prev_disabled_at_page_zero() {
        let mut p = pager();
        assert!(!p.can_prev());
        assert!(!p.prev_page());
        p.next_page(100);
        assert!(p.can_prev());
        assert!(p.prev_page());
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn worked_example_total_45_rows_20() {
        let mut p = pager();
        assert_eq!(p.total_pages(45), 3);
        // Page 0 shows records 0-19.
        assert_eq!(p.offset(), 0);
        assert!(!p.can_prev());
        assert!(p.can_next(45));
        // Page 2 shows records 40-44.
        p.next_page(45);
        p.next_page(45);
        assert_eq!(p.offset(), 40);
        assert!(!p.can_next(45));
    }

    #[test]
    fn total_pages_empty_filter() {
        let p = pager();
        assert_eq!(p.total_pages(0), 0);
        assert!(!p.can_next(0));
    }

    #[test]
    fn params_omit_blank_search() {
        let mut p = pager();
        p.set_search("   ");
        assert_eq!(p.params().search, None);
        p.set_search("  novak ");
        assert_eq!(p.params().search.as_deref(), Some("novak"));
    }

    #[test]
    fn params_carry_limit_offset_and_status() {
        let mut p = pager();
        p.set_status(Some(MatchStatus::NoMatch));
        p.next_page(100);
        let params = p.params();
        assert_eq!(params.limit, 20);
        assert_eq!(params.offset, 20);
        assert_eq!(params.status, Some(MatchStatus::NoMatch));
    }

    #[test]
    fn query_key_covers_every_parameter() {
        let mut a = pager();
        let mut b = pager();
        assert_eq!(a.query_key(), b.query_key());

        b.set_status(None);
        assert_ne!(a.query_key(), b.query_key());

        b.set_status(Some(MatchStatus::Pending));
        assert_eq!(a.query_key(), b.query_key());

        b.set_search("x");
        assert_ne!(a.query_key(), b.query_key());

        a.set_search("x");
        a.next_page(100);
        assert_ne!(a.query_key(), b.query_key(), "page must be part of the key");

        b.next_page(100);
        assert_eq!(a.query_key(), b.query_key());

        b.set_rows_per_page(10);
        assert_ne!(a.query_key(), b.query_key());
    }

    #[test]
    fn query_key_ignores_search_padding() {
        let mut a = pager();
        let mut b = pager();
        a.set_search("novak");
        b.set_search("  novak ");
        assert_eq!(a.query_key(), b.query_key());
    }
}
