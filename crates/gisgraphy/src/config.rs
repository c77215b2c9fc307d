//! Gisgraphy client configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::GisgraphyError;

/// Configuration shared by the async and blocking clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GisgraphyConfig {
    /// Base URL of the Gisgraphy server (e.g. `https://services.gisgraphy.com`)
    #[serde(default)]
    pub server_url: String,

    /// API key sent as `api_key` when non-empty
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("gisgraphy-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GisgraphyConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GisgraphyConfig {
    /// Create a configuration for a server and optional API key
    #[must_use]
    pub fn new(server_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_key,
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(server_url: impl Into<String>) -> Self {
        Self {
            timeout_secs: 5,
            ..Self::new(server_url, None)
        }
    }

    /// Check if a usable API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Validate the settings needed to build an HTTP client
    ///
    /// The server URL is checked per request by [`Self::base_url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), GisgraphyError> {
        if self.timeout_secs == 0 {
            return Err(GisgraphyError::ConfigurationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the server URL into a base that endpoint paths can be appended to
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` when no URL is set and `InvalidServerUrl`
    /// when it is not an absolute URL or carries a query or fragment.
    pub fn base_url(&self) -> Result<String, GisgraphyError> {
        let raw = self.server_url.trim();
        if raw.is_empty() {
            return Err(GisgraphyError::ConfigurationError(
                "server URL is not set".to_string(),
            ));
        }

        let parsed = Url::parse(raw)
            .map_err(|e| GisgraphyError::InvalidServerUrl(format!("{raw}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(GisgraphyError::InvalidServerUrl(format!(
                "{raw}: not a base URL"
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(GisgraphyError::InvalidServerUrl(format!(
                "{raw}: must not carry a query or fragment"
            )));
        }

        Ok(raw.strip_suffix('/').unwrap_or(raw).to_string())
    }
}
