#![deny(missing_docs)]

//! # sanscreen-client — Typed HTTP Client for the Screening Backend
//!
//! One method per REST endpoint, request/response DTOs with exact wire
//! shapes, and uniform error mapping. This crate is deliberately thin:
//!
//! - **No retry, no backoff.** A failed call surfaces immediately; the
//!   polling layer simply tries again on its next tick.
//! - **No caching.** Snapshot caching is the review layer's concern.
//! - **No authentication.** The backend exposes none; no auth headers are
//!   attached to any request.
//!
//! All failures — transport errors, non-2xx statuses, deserialization
//! mismatches — map to [`ApiError`], whose `Display` is the inline string a
//! view shows next to the triggering control.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::ScreeningClient;
pub use config::{ClientConfig, ConfigError, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{
    BatchDetailPage, BatchDetailParams, BatchSummary, Decision, DecisionAuditEntry,
    DecisionCreated, DecisionRequest, SanctionListBreakdown, SanctionListKpi, ScreeningMatch,
    ScreeningResult, SearchLogEntry, SearchLogQuery, SearchType, SingleScreeningOutcome,
    SingleScreeningRequest,
};
