//! # Review Session
//!
//! All state one open batch detail view holds between requests: the pager,
//! the last result snapshot, per-match comment drafts, and per-match
//! submission progress.
//!
//! The session is where the polling contract is enforced structurally
//! rather than by convention:
//!
//! - [`ReviewSession::apply_page`] is the only way results enter the
//!   session, and it can touch nothing but the snapshot slot.
//! - A snapshot is stored and served under the query key it was fetched
//!   for; once a filter changes, the old snapshot silently disappears from
//!   [`ReviewSession::current_page`] instead of being shown stale.
//! - A response for a superseded key is dropped on arrival.

use std::collections::HashMap;

use tracing::debug;

use sanscreen_client::{BatchDetailPage, DecisionRequest};
use sanscreen_core::{BatchId, DecisionKind, MatchStatus, SanctionId, ScreeningResultId, UserId};

use crate::pager::ReviewPager;

/// Addresses one match row: a (screening result, sanction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    /// The screening result the match belongs to.
    pub result_id: ScreeningResultId,
    /// The sanctions-list entry that matched.
    pub sanction_id: SanctionId,
}

impl MatchKey {
    /// Key for a match row.
    pub fn new(result_id: ScreeningResultId, sanction_id: SanctionId) -> Self {
        Self {
            result_id,
            sanction_id,
        }
    }
}

/// Transient submission state of one match row.
///
/// Purely cosmetic from the backend's point of view: the authoritative
/// outcome of a submission is whatever the next poll returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DecisionProgress {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A decision request is in flight.
    Saving,
    /// The last submission was acknowledged.
    Saved,
    /// The last submission failed; carries the inline error string.
    Failed(String),
}

/// State of one open batch review view.
#[derive(Debug)]
pub struct ReviewSession {
    pager: ReviewPager,
    /// Last snapshot, tagged with the query key it was fetched for.
    snapshot: Option<(String, BatchDetailPage)>,
    drafts: HashMap<MatchKey, String>,
    progress: HashMap<MatchKey, DecisionProgress>,
}

impl ReviewSession {
    /// Open a review session on a batch with default pager state.
    pub fn new(batch_id: BatchId) -> Self {
        Self {
            pager: ReviewPager::new(batch_id),
            snapshot: None,
            drafts: HashMap::new(),
            progress: HashMap::new(),
        }
    }

    /// Read-only view of the pager.
    pub fn pager(&self) -> &ReviewPager {
        &self.pager
    }

    /// The query key the next fetch must use.
    pub fn query_key(&self) -> String {
        self.pager.query_key()
    }

    // ─── Filter changes (reset page, keep drafts) ───────────────────────

    /// Change the status filter. Resets to page 0.
    pub fn set_status(&mut self, status: Option<MatchStatus>) {
        self.pager.set_status(status);
    }

    /// Change the search text. Resets to page 0.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.pager.set_search(search);
    }

    /// Change the page size. Resets to page 0.
    pub fn set_rows_per_page(&mut self, rows_per_page: u32) {
        self.pager.set_rows_per_page(rows_per_page);
    }

    /// Jump directly to a page, keeping filters. Used when a view is opened
    /// at a remembered position; bounds are the caller's concern.
    pub fn set_page(&mut self, page: u32) {
        self.pager.set_page(page);
    }

    /// Advance one page if the current snapshot's total allows it.
    pub fn next_page(&mut self) -> bool {
        match self.current_total() {
            Some(total) => self.pager.next_page(total),
            None => false,
        }
    }

    /// Step back one page.
    pub fn prev_page(&mut self) -> bool {
        self.pager.prev_page()
    }

    // ─── Snapshots ──────────────────────────────────────────────────────

    /// Accept a fetched page. `key` is the query key the fetch was issued
    /// under; a response for anything but the current key is superseded
    /// and dropped. Nothing besides the snapshot slot is touched — pager
    /// state, drafts, and submission progress all survive every poll.
    pub fn apply_page(&mut self, key: &str, page: BatchDetailPage) {
        let current = self.pager.query_key();
        if key != current {
            debug!(stale = key, current = %current, "dropping superseded page");
            return;
        }
        self.snapshot = Some((current, page));
    }

    /// The snapshot for the current filter combination, if one has been
    /// fetched. Returns `None` after any filter change until a matching
    /// fetch lands — a stale page is never shown.
    pub fn current_page(&self) -> Option<&BatchDetailPage> {
        self.snapshot
            .as_ref()
            .filter(|(key, _)| *key == self.pager.query_key())
            .map(|(_, page)| page)
    }

    /// Total result count of the current snapshot.
    pub fn current_total(&self) -> Option<u64> {
        self.current_page().map(|page| page.total)
    }

    /// Whether "Next" should be offered, given the current snapshot.
    pub fn can_next(&self) -> bool {
        self.current_total()
            .is_some_and(|total| self.pager.can_next(total))
    }

    /// Whether "Previous" should be offered.
    pub fn can_prev(&self) -> bool {
        self.pager.can_prev()
    }

    // ─── Comment drafts ─────────────────────────────────────────────────

    /// The draft comment for a match row, if one is being typed.
    pub fn draft(&self, key: &MatchKey) -> Option<&str> {
        self.drafts.get(key).map(String::as_str)
    }

    /// Store the draft comment for a match row.
    pub fn set_draft(&mut self, key: MatchKey, text: impl Into<String>) {
        self.drafts.insert(key, text.into());
    }

    /// Discard the draft comment for a match row.
    pub fn clear_draft(&mut self, key: &MatchKey) {
        self.drafts.remove(key);
    }

    // ─── Decision submission ────────────────────────────────────────────

    /// Build the decision request for a match row. The input name goes on
    /// the wire verbatim as the normalized search term; a blank draft
    /// comment is omitted rather than sent empty.
    pub fn decision_request(
        &self,
        key: &MatchKey,
        input_name: &str,
        decision: DecisionKind,
        user_id: UserId,
    ) -> DecisionRequest {
        let comment = self
            .drafts
            .get(key)
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(String::from);
        DecisionRequest {
            search_term_normalized: input_name.to_string(),
            sanction_id: key.sanction_id.clone(),
            decision,
            user_id,
            comment,
        }
    }

    /// Mark a match row's submission as in flight.
    pub fn begin_submit(&mut self, key: MatchKey) {
        self.progress.insert(key, DecisionProgress::Saving);
    }

    /// Mark a match row's submission as acknowledged. The snapshot is NOT
    /// touched; the row's status changes when a later poll says so.
    pub fn complete_submit(&mut self, key: MatchKey) {
        self.progress.insert(key, DecisionProgress::Saved);
    }

    /// Mark a match row's submission as failed with its inline message.
    pub fn fail_submit(&mut self, key: MatchKey, message: impl Into<String>) {
        self.progress
            .insert(key, DecisionProgress::Failed(message.into()));
    }

    /// Submission state of a match row.
    pub fn progress(&self, key: &MatchKey) -> DecisionProgress {
        self.progress.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanscreen_client::{BatchSummary, ScreeningMatch, ScreeningResult};
    use sanscreen_core::BatchStatus;

    fn sanction(raw: &str) -> SanctionId {
        SanctionId::new(raw).expect("valid sanction id")
    }

    fn page_with(total: u64, statuses: &[MatchStatus]) -> BatchDetailPage {
        let results = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| ScreeningResult {
                id: ScreeningResultId::new(100 + i as i64),
                input_name: format!("Name {i}"),
                match_status: *status,
                matches: vec![ScreeningMatch {
                    sanction_id: sanction("EU-123"),
                    match_name: "NOVAK, Ivan".to_string(),
                    match_score: 92.5,
                }],
            })
            .collect();
        BatchDetailPage {
            batch: BatchSummary {
                id: BatchId::new(3),
                filename: "partners.csv".to_string(),
                uploaded_at: chrono::Utc::now(),
                total_records: total,
                flagged_count: Some(4),
                status: BatchStatus::Completed,
            },
            results,
            total,
        }
    }

    fn match_key() -> MatchKey {
        MatchKey::new(ScreeningResultId::new(100), sanction("EU-123"))
    }

    fn user() -> UserId {
        UserId::new("user1").expect("valid user")
    }

    #[test]
    fn poll_replaces_snapshot_only() {
        let mut session = ReviewSession::new(BatchId::new(3));
        session.set_search("novak");
        session.set_draft(match_key(), "checking with legal");

        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));
        session.apply_page(&key, page_with(45, &[MatchStatus::TrueMatch]));

        // Snapshot updated...
        assert_eq!(
            session.current_page().unwrap().results[0].match_status,
            MatchStatus::TrueMatch
        );
        // ...but pager and drafts survived the poll.
        assert_eq!(session.pager().search(), "novak");
        assert_eq!(session.pager().page(), 0);
        assert_eq!(session.draft(&match_key()), Some("checking with legal"));
    }

    #[test]
    fn poll_does_not_reset_pagination() {
        let mut session = ReviewSession::new(BatchId::new(3));
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));
        assert!(session.next_page());
        assert_eq!(session.pager().page(), 1);

        // The page-1 fetch lands; the user stays on page 1.
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));
        assert_eq!(session.pager().page(), 1);
    }

    #[test]
    fn filter_change_hides_stale_snapshot() {
        let mut session = ReviewSession::new(BatchId::new(3));
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));
        assert!(session.current_page().is_some());

        session.set_status(None);
        assert!(
            session.current_page().is_none(),
            "old snapshot must not be shown for the new filter"
        );

        // Reverting to the original filter makes the old snapshot valid again.
        session.set_status(Some(MatchStatus::Pending));
        assert!(session.current_page().is_some());
    }

    #[test]
    fn superseded_poll_response_is_dropped() {
        let mut session = ReviewSession::new(BatchId::new(3));
        let old_key = session.query_key();
        session.set_search("novak");

        // A response from before the filter change arrives late.
        session.apply_page(&old_key, page_with(45, &[MatchStatus::Pending]));
        assert!(session.current_page().is_none());
    }

    #[test]
    fn next_page_requires_a_snapshot() {
        let mut session = ReviewSession::new(BatchId::new(3));
        assert!(!session.next_page(), "no snapshot, no total, no paging");
    }

    #[test]
    fn next_and_prev_follow_snapshot_total() {
        let mut session = ReviewSession::new(BatchId::new(3));
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));

        assert!(session.can_next());
        assert!(!session.can_prev());
        assert!(session.next_page());

        // Page 1 snapshot.
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));
        assert!(session.next_page());

        // Page 2 is the last page of 45/20.
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));
        assert!(!session.can_next());
        assert!(session.can_prev());
    }

    #[test]
    fn submission_never_mutates_match_list() {
        let mut session = ReviewSession::new(BatchId::new(3));
        let key = session.query_key();
        session.apply_page(&key, page_with(45, &[MatchStatus::Pending]));

        session.begin_submit(match_key());
        session.complete_submit(match_key());

        // The displayed status is still whatever the server last said.
        let page = session.current_page().unwrap();
        assert_eq!(page.results[0].match_status, MatchStatus::Pending);
        assert_eq!(page.results[0].matches.len(), 1);
        assert_eq!(session.progress(&match_key()), DecisionProgress::Saved);
    }

    #[test]
    fn failed_submission_carries_inline_error() {
        let mut session = ReviewSession::new(BatchId::new(3));
        session.begin_submit(match_key());
        assert_eq!(session.progress(&match_key()), DecisionProgress::Saving);

        session.fail_submit(match_key(), "unknown sanction id");
        assert_eq!(
            session.progress(&match_key()),
            DecisionProgress::Failed("unknown sanction id".to_string())
        );
    }

    #[test]
    fn submissions_on_different_matches_are_independent() {
        let mut session = ReviewSession::new(BatchId::new(3));
        let other = MatchKey::new(ScreeningResultId::new(101), sanction("UK-88"));

        session.begin_submit(match_key());
        session.fail_submit(match_key(), "boom");
        session.begin_submit(other.clone());

        assert!(matches!(
            session.progress(&match_key()),
            DecisionProgress::Failed(_)
        ));
        assert_eq!(session.progress(&other), DecisionProgress::Saving);
    }

    #[test]
    fn decision_request_uses_input_name_and_draft() {
        let mut session = ReviewSession::new(BatchId::new(3));
        session.set_draft(match_key(), "  known customer  ");

        let req = session.decision_request(
            &match_key(),
            "Ivan Novak",
            DecisionKind::FalsePositive,
            user(),
        );
        assert_eq!(req.search_term_normalized, "Ivan Novak");
        assert_eq!(req.sanction_id.as_str(), "EU-123");
        assert_eq!(req.decision, DecisionKind::FalsePositive);
        assert_eq!(req.comment.as_deref(), Some("known customer"));
    }

    #[test]
    fn blank_draft_comment_is_omitted() {
        let mut session = ReviewSession::new(BatchId::new(3));
        session.set_draft(match_key(), "   ");
        let req =
            session.decision_request(&match_key(), "Ivan Novak", DecisionKind::Revisit, user());
        assert_eq!(req.comment, None);
    }

    #[test]
    fn clear_draft_forgets_the_text() {
        let mut session = ReviewSession::new(BatchId::new(3));
        session.set_draft(match_key(), "note");
        session.clear_draft(&match_key());
        assert_eq!(session.draft(&match_key()), None);
    }
}
