//! Screening API client error types.
//!
//! Every failure funnels into [`ApiError`]; its `Display` output is the
//! inline string a view shows. No variant is retried and none is fatal —
//! a 404, a 500, and a connection refusal differ only in message text.

/// Errors from screening API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint path that was being called.
        endpoint: String,
        /// The underlying transport failure.
        source: reqwest::Error,
    },
    /// The backend returned a non-2xx status.
    #[error("screening API {endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint path that was being called.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The endpoint path that was being called.
        endpoint: String,
        /// The underlying decode failure.
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl ApiError {
    /// The string a view places next to the triggering control.
    ///
    /// For a rejected request this is the response body verbatim (an upload
    /// failing with body `"invalid file"` displays exactly that), falling
    /// back to the full message when the body is empty.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { body, .. } if !body.trim().is_empty() => body.clone(),
            other => other.to_string(),
        }
    }

    /// The HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
