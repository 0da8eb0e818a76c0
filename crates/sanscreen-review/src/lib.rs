#![deny(missing_docs)]

//! # sanscreen-review — Review Workflow State
//!
//! The one genuinely stateful piece of the client: everything a review view
//! holds between requests, with the invariants the backend contract
//! demands. Pure state — this crate performs no I/O; callers fetch through
//! `sanscreen-client` and feed responses in.
//!
//! ## Invariants Owned Here
//!
//! - Changing any filter parameter resets the page to 0 before the next
//!   fetch ([`ReviewPager`]).
//! - The query key covers every parameter, so a snapshot fetched for one
//!   filter combination is never shown for another ([`ReviewSession`]).
//! - A poll tick replaces only the result snapshot; pager state, comment
//!   drafts, and submission state survive untouched ([`ReviewSession`]).
//! - Recording a decision never mutates the locally held match list; the
//!   displayed status changes only when a later fetch says so.

pub mod audit;
pub mod cache;
pub mod pager;
pub mod session;

pub use audit::AuditViewer;
pub use cache::{SnapshotCache, DASHBOARD_POLL, KPI_POLL, RESULT_VIEW_POLL};
pub use pager::{ReviewPager, DEFAULT_ROWS_PER_PAGE};
pub use session::{DecisionProgress, MatchKey, ReviewSession};
