//! Request and response DTOs for the screening backend, with exact wire
//! shapes.
//!
//! Responses deserialize strictly where the contract is known (ids,
//! statuses, timestamps) and loosely where the backend is the authority on
//! shape (single-screening match records are opaque
//! [`serde_json::Value`]s). Requests serialize exactly what the backend
//! expects — notably, an absent comment is omitted rather than sent as
//! `null`, and filters are omitted rather than sent empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use sanscreen_core::{
    BatchId, BatchStatus, CompanyId, DecisionId, DecisionKind, MatchStatus, SanctionId,
    ScreeningResultId, UserId, ValidationError,
};

/// Default fuzzy-match threshold for single screenings.
pub const DEFAULT_SCREENING_THRESHOLD: u8 = 85;

/// Default page size for search-log history queries.
pub const DEFAULT_SEARCH_LOG_LIMIT: u32 = 50;

// ─── Batches ────────────────────────────────────────────────────────────

/// One uploaded batch, as listed by `GET /api/v1/batch/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Backend identifier.
    pub id: BatchId,
    /// Original filename of the uploaded file.
    pub filename: String,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
    /// Number of names in the file.
    pub total_records: u64,
    /// Number of names with at least one hit; absent until processing ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged_count: Option<u64>,
    /// Server-side lifecycle state.
    pub status: BatchStatus,
}

/// One candidate sanctions-list hit for an input name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningMatch {
    /// The sanctions-list entry that matched.
    pub sanction_id: SanctionId,
    /// The specific name or alias that matched.
    pub match_name: String,
    /// Fuzzy-match score, 0–100.
    pub match_score: f64,
}

/// Screening outcome for one input name of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// Backend identifier.
    pub id: ScreeningResultId,
    /// The name as it appeared in the uploaded file.
    pub input_name: String,
    /// Server-authoritative rollup; never computed client-side.
    pub match_status: MatchStatus,
    /// Candidate hits, ordered by the backend (best first).
    #[serde(default)]
    pub matches: Vec<ScreeningMatch>,
}

/// One page of batch results plus batch metadata and the unfiltered-page
/// total, as returned by `GET /api/v1/batch/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDetailPage {
    /// The batch the page belongs to.
    pub batch: BatchSummary,
    /// The requested page of results.
    pub results: Vec<ScreeningResult>,
    /// Total result count for the current filter combination.
    pub total: u64,
}

/// Query parameters for one page of batch detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDetailParams {
    /// Page size.
    pub limit: u32,
    /// Row offset of the page start.
    pub offset: u32,
    /// Optional match-status filter.
    pub status: Option<MatchStatus>,
    /// Optional free-text filter on the input name. Stored trimmed; an
    /// empty value must be represented as `None`, never `Some("")`.
    pub search: Option<String>,
}

impl BatchDetailParams {
    /// Build parameters for a page with no filters.
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            status: None,
            search: None,
        }
    }

    /// The query pairs actually sent on the wire. Absent filters are
    /// omitted entirely; an empty or whitespace-only search is never sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status", status.as_wire().to_string()));
        }
        if let Some(search) = self.search.as_deref() {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                pairs.push(("search", trimmed.to_string()));
            }
        }
        pairs
    }
}

// ─── Decisions ──────────────────────────────────────────────────────────

/// Body of `POST /api/v1/decision/create`.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRequest {
    /// The screened name the decision applies to, verbatim.
    pub search_term_normalized: String,
    /// The sanctions-list entry the decision applies to.
    pub sanction_id: SanctionId,
    /// The reviewer's verdict, in the unified vocabulary.
    pub decision: DecisionKind,
    /// The acting reviewer.
    pub user_id: UserId,
    /// Optional free-text rationale; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Acknowledgement returned by `POST /api/v1/decision/create`.
///
/// The backend returns only the new decision's id and a literal
/// `"created"` marker — not the full decision row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionCreated {
    /// Identifier of the newly created decision.
    pub id: DecisionId,
    /// Creation marker, `"created"`.
    pub status: String,
}

/// One recorded decision, as listed by `GET /api/v1/decision/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Backend identifier.
    pub id: DecisionId,
    /// The screened name the decision applies to.
    pub search_term_normalized: String,
    /// The sanctions-list entry the decision applies to.
    pub sanction_id: SanctionId,
    /// The recorded verdict.
    pub decision: MatchStatus,
    /// Free-text rationale, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Recording timestamp.
    pub created_at: DateTime<Utc>,
    /// The reviewer who recorded it.
    pub user_id: String,
    /// Whether a later decision superseded this one (server-determined).
    pub revoked: bool,
}

/// One audit log entry for a decision, as returned by
/// `GET /api/v1/decision/audit/{id}` (ordered by timestamp).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionAuditEntry {
    /// Backend identifier of the log entry.
    pub id: i64,
    /// What happened: `create`, `revoke`, or `update`.
    pub action: String,
    /// Verdict before the action, if any.
    pub old_value: Option<String>,
    /// Verdict after the action, if any.
    pub new_value: Option<String>,
    /// The actor.
    pub user_id: String,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
    /// Free-text note attached to the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ─── Single screening & search log ──────────────────────────────────────

/// What kind of name a single screening targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    /// A legal entity name.
    Company,
    /// A natural person's name.
    Individual,
}

impl SearchType {
    /// The wire spelling.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Company => "COMPANY",
            Self::Individual => "INDIVIDUAL",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for SearchType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COMPANY" => Ok(Self::Company),
            "INDIVIDUAL" => Ok(Self::Individual),
            _ => Err(ValidationError::UnknownSearchType(s.to_string())),
        }
    }
}

/// Body of `POST /api/v1/single_screening/`.
#[derive(Debug, Clone, Serialize)]
pub struct SingleScreeningRequest {
    /// The name to screen.
    pub search_term: String,
    /// Entity kind of the name.
    pub search_type: SearchType,
    /// The acting reviewer.
    pub user_id: UserId,
    /// The tenant company the screening runs under.
    pub company_id: CompanyId,
    /// Fuzzy-match threshold, 0–100.
    pub threshold: u8,
}

impl SingleScreeningRequest {
    /// Build a request with the default threshold.
    pub fn new(
        search_term: impl Into<String>,
        search_type: SearchType,
        user_id: UserId,
        company_id: CompanyId,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            search_type,
            user_id,
            company_id,
            threshold: DEFAULT_SCREENING_THRESHOLD,
        }
    }
}

/// Result of a single screening. Match records are backend-shaped sanction
/// rows; the client treats them as opaque JSON and renders known fields
/// when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleScreeningOutcome {
    /// The matching sanction records, best first.
    #[serde(default)]
    pub matches: Vec<serde_json::Value>,
    /// Number of matches found.
    pub result_count: u64,
}

/// Query parameters for `GET /api/v1/search_log/`.
#[derive(Debug, Clone)]
pub struct SearchLogQuery {
    /// Tenant company to list history for.
    pub company_id: CompanyId,
    /// Restrict to one reviewer; appended only when present.
    pub user_id: Option<UserId>,
    /// Rows to skip.
    pub skip: u32,
    /// Page size.
    pub limit: u32,
}

impl SearchLogQuery {
    /// History for a company with default paging (skip 0, limit 50).
    pub fn for_company(company_id: CompanyId) -> Self {
        Self {
            company_id,
            user_id: None,
            skip: 0,
            limit: DEFAULT_SEARCH_LOG_LIMIT,
        }
    }

    /// The query pairs actually sent on the wire.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("company_id", self.company_id.to_string()),
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(user) = &self.user_id {
            pairs.push(("user_id", user.to_string()));
        }
        pairs
    }
}

/// One prior single screening, as returned by `GET /api/v1/search_log/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchLogEntry {
    /// Backend identifier.
    pub id: i64,
    /// When the screening ran.
    pub timestamp: DateTime<Utc>,
    /// The screened name.
    pub search_term: String,
    /// Entity kind of the screened name.
    pub search_type: SearchType,
    /// Number of matches found.
    pub result_count: u64,
    /// The reviewer who ran it, if recorded.
    pub user_id: Option<String>,
    /// The tenant company, if recorded.
    pub company_id: Option<String>,
}

// ─── KPIs ───────────────────────────────────────────────────────────────

/// Per-entity-type record counts of one sanctions list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanctionListBreakdown {
    /// Natural persons.
    #[serde(default)]
    pub individual_count: u64,
    /// Legal entities.
    #[serde(default)]
    pub entity_count: u64,
    /// Aircraft.
    #[serde(default)]
    pub aircraft_count: u64,
    /// Vessels.
    #[serde(default)]
    pub vessel_count: u64,
    /// Anything else.
    #[serde(default)]
    pub other_count: u64,
}

/// Freshness and volume metrics for one sanctions list source, as returned
/// by `GET /api/v1/kpi/sanction-lists`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanctionListKpi {
    /// List source (EU, UK, US, ...).
    pub source: String,
    /// Timestamp of the most recent import, if any ever ran.
    pub last_update: Option<DateTime<Utc>>,
    /// Records added over the queried window.
    #[serde(default)]
    pub records_added: u64,
    /// Records updated over the queried window.
    #[serde(default)]
    pub records_updated: u64,
    /// Records removed over the queried window.
    #[serde(default)]
    pub records_removed: u64,
    /// Current total record count for the list.
    #[serde(default)]
    pub total_records: u64,
    /// Per-entity-type split of the total.
    pub breakdown: SanctionListBreakdown,
}
