#![deny(missing_docs)]

//! # sanscreen-core — Domain Vocabulary for the Screening Review Client
//!
//! Foundational types shared by every other crate in the workspace. It has
//! no internal crate dependencies — only `serde`, `thiserror`, and `uuid`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`BatchId`] where a [`DecisionId`] is
//!    expected.
//!
//! 2. **One status vocabulary.** The screening backend historically accepted
//!    two spellings of a reviewer's verdict (TRUE_MATCH/FALSE_POSITIVE vs
//!    CONFIRMED/CLEARED). This crate defines the single wire vocabulary in
//!    [`MatchStatus`] and [`DecisionKind`]; legacy spellings are accepted as
//!    parse-time aliases and never serialized.
//!
//! 3. **Statuses are server-authoritative.** [`MatchStatus`] and
//!    [`BatchStatus`] are read back from the backend; nothing in this
//!    workspace computes or infers them locally.

pub mod error;
pub mod identity;
pub mod status;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identity::{BatchId, CompanyId, DecisionId, SanctionId, ScreeningResultId, UserId};
pub use status::{BatchStatus, DecisionKind, MatchStatus};
