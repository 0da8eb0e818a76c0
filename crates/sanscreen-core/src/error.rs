//! # Error Hierarchy
//!
//! Structured validation errors for the domain primitives, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the rejected input and the expected format so that
//! operators can diagnose misconfiguration without guesswork.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
///
/// Each identifier type enforces format constraints at construction time.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Sanction identifier is empty or whitespace-only.
    #[error("invalid sanction ID: \"{0}\" (expected a non-empty list identifier such as \"EU-123\")")]
    InvalidSanctionId(String),

    /// User identifier is empty.
    #[error("invalid user ID: must be non-empty")]
    InvalidUserId,

    /// Company identifier is not a UUID.
    #[error("invalid company ID: \"{value}\" ({reason})")]
    InvalidCompanyId {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Status string does not name a known match status.
    #[error("unknown match status: \"{0}\" (expected PENDING, TRUE_MATCH, FALSE_POSITIVE, NO_MATCH, or REVISIT)")]
    UnknownMatchStatus(String),

    /// Decision string does not name a recordable decision.
    #[error("unknown decision: \"{0}\" (expected TRUE_MATCH, FALSE_POSITIVE, or REVISIT)")]
    UnknownDecision(String),

    /// Batch status string does not name a known lifecycle state.
    #[error("unknown batch status: \"{0}\" (expected PENDING, PROCESSING, COMPLETED, or FAILED)")]
    UnknownBatchStatus(String),

    /// Search type string does not name a screenable entity kind.
    #[error("unknown search type: \"{0}\" (expected COMPANY or INDIVIDUAL)")]
    UnknownSearchType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sanction_id_display() {
        let err = ValidationError::InvalidSanctionId("   ".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("sanction ID"));
        assert!(msg.contains("EU-123"));
    }

    #[test]
    fn invalid_user_id_display() {
        let err = ValidationError::InvalidUserId;
        assert!(format!("{err}").contains("non-empty"));
    }

    #[test]
    fn invalid_company_id_display() {
        let err = ValidationError::InvalidCompanyId {
            value: "not-a-uuid".to_string(),
            reason: "invalid length".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("not-a-uuid"));
        assert!(msg.contains("invalid length"));
    }

    #[test]
    fn unknown_match_status_display() {
        let err = ValidationError::UnknownMatchStatus("MAYBE".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("MAYBE"));
        assert!(msg.contains("TRUE_MATCH"));
    }

    #[test]
    fn unknown_decision_display() {
        let err = ValidationError::UnknownDecision("SHRUG".to_string());
        assert!(format!("{err}").contains("SHRUG"));
    }

    #[test]
    fn all_error_variants_are_debug() {
        let e1 = ValidationError::InvalidUserId;
        let e2 = ValidationError::UnknownBatchStatus("x".to_string());
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
    }
}
