//! # Status Vocabulary
//!
//! The three status enums of the screening domain, with their exact wire
//! spellings. All three are produced or consumed by the backend; the client
//! never derives one from another.
//!
//! ## Unification Note
//!
//! The source system's single-name screening spoke CONFIRMED/CLEARED while
//! batch review spoke TRUE_MATCH/FALSE_POSITIVE, both landing in the same
//! decision table. [`DecisionKind`] is the single vocabulary this client
//! puts on the wire; the legacy verbs survive only as parse aliases in
//! [`DecisionKind::from_str`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Screening verdict for one input name, as rolled up by the backend.
///
/// This value is server-authoritative: it only changes through server-side
/// re-evaluation after a decision is recorded, and the client only observes
/// it via fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Awaiting human review.
    Pending,
    /// A reviewer confirmed the hit.
    TrueMatch,
    /// A reviewer cleared the hit.
    FalsePositive,
    /// The matcher found nothing above threshold.
    NoMatch,
    /// A reviewer deferred the hit for later review.
    Revisit,
}

impl MatchStatus {
    /// The wire spelling (`SCREAMING_SNAKE_CASE`), also used in query strings.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::TrueMatch => "TRUE_MATCH",
            Self::FalsePositive => "FALSE_POSITIVE",
            Self::NoMatch => "NO_MATCH",
            Self::Revisit => "REVISIT",
        }
    }

    /// All statuses, in review-workflow order. Used to enumerate filter
    /// options.
    pub fn all() -> [MatchStatus; 5] {
        [
            Self::Pending,
            Self::TrueMatch,
            Self::FalsePositive,
            Self::NoMatch,
            Self::Revisit,
        ]
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for MatchStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "PENDING" => Ok(Self::Pending),
            "TRUE_MATCH" => Ok(Self::TrueMatch),
            "FALSE_POSITIVE" => Ok(Self::FalsePositive),
            "NO_MATCH" => Ok(Self::NoMatch),
            "REVISIT" => Ok(Self::Revisit),
            _ => Err(ValidationError::UnknownMatchStatus(s.to_string())),
        }
    }
}

/// A reviewer's recordable verdict on one (input name, sanction) pair.
///
/// The subset of [`MatchStatus`] a human may assert; PENDING and NO_MATCH
/// are machine states and cannot be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionKind {
    /// Confirm the hit as a true match.
    TrueMatch,
    /// Clear the hit as a false positive.
    FalsePositive,
    /// Defer: flag the pair for another look.
    Revisit,
}

impl DecisionKind {
    /// The wire spelling put in the decision request body.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::TrueMatch => "TRUE_MATCH",
            Self::FalsePositive => "FALSE_POSITIVE",
            Self::Revisit => "REVISIT",
        }
    }

    /// The match status the backend rolls a result up to once this decision
    /// is active. Exposed for display only — the client never applies it
    /// locally.
    pub fn resulting_status(&self) -> MatchStatus {
        match self {
            Self::TrueMatch => MatchStatus::TrueMatch,
            Self::FalsePositive => MatchStatus::FalsePositive,
            Self::Revisit => MatchStatus::Revisit,
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for DecisionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            // Unified vocabulary.
            "TRUE_MATCH" => Ok(Self::TrueMatch),
            "FALSE_POSITIVE" => Ok(Self::FalsePositive),
            "REVISIT" => Ok(Self::Revisit),
            // Legacy single-screening verbs, accepted as input only.
            "CONFIRMED" | "CONFIRM" => Ok(Self::TrueMatch),
            "CLEARED" | "CLEAR" => Ok(Self::FalsePositive),
            _ => Err(ValidationError::UnknownDecision(s.to_string())),
        }
    }
}

/// Lifecycle state of an uploaded batch. Transitions are driven entirely
/// server-side; the client only polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Accepted but not yet picked up by the screening engine.
    Pending,
    /// The engine is screening the batch.
    Processing,
    /// Screening finished; results are complete.
    Completed,
    /// The batch could not be processed.
    Failed,
}

impl BatchStatus {
    /// The wire spelling.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }

    /// Whether the server will no longer change this batch.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for BatchStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            _ => Err(ValidationError::UnknownBatchStatus(s.to_string())),
        }
    }
}

/// Case- and separator-insensitive normalization for CLI-supplied status
/// strings: `true-match`, `true_match`, and `TRUE_MATCH` all parse.
fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- MatchStatus ------------------------------------------------------------

    #[test]
    fn match_status_wire_spellings() {
        assert_eq!(MatchStatus::Pending.as_wire(), "PENDING");
        assert_eq!(MatchStatus::TrueMatch.as_wire(), "TRUE_MATCH");
        assert_eq!(MatchStatus::FalsePositive.as_wire(), "FALSE_POSITIVE");
        assert_eq!(MatchStatus::NoMatch.as_wire(), "NO_MATCH");
        assert_eq!(MatchStatus::Revisit.as_wire(), "REVISIT");
    }

    #[test]
    fn match_status_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&MatchStatus::FalsePositive).expect("serialize");
        assert_eq!(json, "\"FALSE_POSITIVE\"");
        let back: MatchStatus = serde_json::from_str("\"NO_MATCH\"").expect("deserialize");
        assert_eq!(back, MatchStatus::NoMatch);
    }

    #[test]
    fn match_status_parse_is_case_and_separator_insensitive() {
        assert_eq!(
            "true-match".parse::<MatchStatus>().unwrap(),
            MatchStatus::TrueMatch
        );
        assert_eq!(
            "pending".parse::<MatchStatus>().unwrap(),
            MatchStatus::Pending
        );
    }

    #[test]
    fn match_status_parse_rejects_unknown() {
        assert!("MAYBE".parse::<MatchStatus>().is_err());
    }

    #[test]
    fn match_status_all_covers_every_variant() {
        assert_eq!(MatchStatus::all().len(), 5);
    }

    // -- DecisionKind -----------------------------------------------------------

    #[test]
    fn decision_kind_serializes_unified_vocabulary() {
        let json = serde_json::to_string(&DecisionKind::TrueMatch).expect("serialize");
        assert_eq!(json, "\"TRUE_MATCH\"");
    }

    #[test]
    fn decision_kind_accepts_legacy_verbs_on_parse() {
        assert_eq!(
            "CONFIRMED".parse::<DecisionKind>().unwrap(),
            DecisionKind::TrueMatch
        );
        assert_eq!(
            "cleared".parse::<DecisionKind>().unwrap(),
            DecisionKind::FalsePositive
        );
        assert_eq!(
            "clear".parse::<DecisionKind>().unwrap(),
            DecisionKind::FalsePositive
        );
    }

    #[test]
    fn decision_kind_never_deserializes_legacy_verbs() {
        // Wire payloads must already speak the unified vocabulary.
        let bad: Result<DecisionKind, _> = serde_json::from_str("\"CONFIRMED\"");
        assert!(bad.is_err());
    }

    #[test]
    fn decision_kind_resulting_status() {
        assert_eq!(
            DecisionKind::TrueMatch.resulting_status(),
            MatchStatus::TrueMatch
        );
        assert_eq!(
            DecisionKind::Revisit.resulting_status(),
            MatchStatus::Revisit
        );
    }

    #[test]
    fn decision_kind_rejects_machine_states() {
        assert!("PENDING".parse::<DecisionKind>().is_err());
        assert!("NO_MATCH".parse::<DecisionKind>().is_err());
    }

    // -- BatchStatus ------------------------------------------------------------

    #[test]
    fn batch_status_roundtrip() {
        for status in [
            BatchStatus::Pending,
            BatchStatus::Processing,
            BatchStatus::Completed,
            BatchStatus::Failed,
        ] {
            let json = serde_json::to_string(&status).expect("serialize");
            let back: BatchStatus = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, status);
            assert_eq!(status.as_wire().parse::<BatchStatus>().unwrap(), status);
        }
    }

    #[test]
    fn batch_status_terminality() {
        assert!(!BatchStatus::Pending.is_terminal());
        assert!(!BatchStatus::Processing.is_terminal());
        assert!(BatchStatus::Completed.is_terminal());
        assert!(BatchStatus::Failed.is_terminal());
    }
}
