//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the review client.
//! Each identifier is a distinct type — you cannot pass a [`BatchId`] where
//! a [`DecisionId`] is expected.
//!
//! ## Validation
//!
//! String-based identifiers ([`SanctionId`], [`UserId`]) validate at
//! construction time. Integer-based identifiers ([`BatchId`],
//! [`ScreeningResultId`], [`DecisionId`]) mirror the backend's surrogate
//! keys and are always valid by construction. [`CompanyId`] wraps a UUID
//! because the tenant context of the source system is UUID-keyed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Helper macro for the integer-keyed identifiers the backend hands out.
/// They carry no format constraints beyond being an `i64`.
macro_rules! int_id {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $ty(i64);

        impl $ty {
            /// Wrap a raw backend identifier.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Access the underlying integer.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $ty {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

int_id! {
    /// Identifier of an uploaded screening batch.
    BatchId
}

int_id! {
    /// Identifier of one per-name screening result inside a batch.
    ScreeningResultId
}

int_id! {
    /// Identifier of a recorded reviewer decision.
    DecisionId
}

/// Identifier of a sanctions-list entry (e.g. `"EU-123"`).
///
/// The backend composes these from the list source and the source's own
/// record key; the client treats them as opaque non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SanctionId(String);

impl SanctionId {
    /// Validate and wrap a sanction identifier. Leading and trailing
    /// whitespace is rejected rather than trimmed so that the identifier
    /// used for a decision is byte-identical to the one the match carried.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() || raw.trim() != raw {
            return Err(ValidationError::InvalidSanctionId(raw));
        }
        Ok(Self(raw))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(SanctionId);

impl std::fmt::Display for SanctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SanctionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of the acting reviewer.
///
/// The source system attaches whatever its (stubbed) auth layer provides —
/// sometimes a UUID string, sometimes a plain username — so this is a
/// non-empty string, not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(String);

impl UserId {
    /// Validate and wrap a user identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::InvalidUserId);
        }
        Ok(Self(raw))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(UserId);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of the tenant company a screening runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(Uuid);

impl CompanyId {
    /// Create a company identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse a company identifier from its canonical string form.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|e| ValidationError::InvalidCompanyId {
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for CompanyId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CompanyId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
