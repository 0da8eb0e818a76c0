//! Client configuration: base URL resolution and request timeout.
//!
//! The base URL comes from the `SANSCREEN_API_BASE` environment variable
//! when set, falling back to the local development backend. Validation
//! happens when the client is built, not at lookup time, so a bad override
//! fails loudly on startup rather than on the first request.

use thiserror::Error;

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "SANSCREEN_API_BASE";

/// Local development fallback used when no override is present.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured base URL is not a parseable absolute URL.
    #[error("invalid base URL \"{value}\": {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// The parse failure.
        source: url::ParseError,
    },
}

/// Configuration for [`crate::ScreeningClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the screening backend (e.g. `http://127.0.0.1:8001`).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Resolve the base URL from `SANSCREEN_API_BASE`, falling back to the
    /// local development backend.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Validate the base URL and return it trimmed of any trailing slash.
    pub(crate) fn validated_base_url(&self) -> Result<String, ConfigError> {
        let trimmed = self.base_url.trim_end_matches('/');
        url::Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: self.base_url.clone(),
            source,
        })?;
        Ok(trimmed.to_string())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8001");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn validated_base_url_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8001/");
        assert_eq!(
            config.validated_base_url().unwrap(),
            "http://localhost:8001"
        );
    }

    #[test]
    fn validated_base_url_rejects_garbage() {
        let config = ClientConfig::new("not a url");
        let err = config.validated_base_url().unwrap_err();
        assert!(format!("{err}").contains("not a url"));
    }

    #[test]
    fn from_env_falls_back_without_override() {
        // The variable is not set in the test environment unless a caller
        // exported it; either way the result must be a non-empty URL.
        let config = ClientConfig::from_env();
        assert!(!config.base_url.is_empty());
    }
}
