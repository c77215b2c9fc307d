//! Gisgraphy client error types

use thiserror::Error;

/// Errors raised before or instead of a usable HTTP response.
///
/// A response that arrives is never turned into an error: non-success
/// statuses and undecodable bodies come back as degraded results
/// (see [`crate::ServiceResult::is_degraded`]).
#[derive(Debug, Error)]
pub enum GisgraphyError {
    /// A required argument was empty or only half of a coordinate pair was given
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// An ISO country or language code had the wrong length
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A numeric argument fell outside its domain
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The client configuration is incomplete or unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The configured server URL is not a valid absolute URL
    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    /// No HTTP response was received
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GisgraphyError {
    /// Returns true if the error came from argument validation
    #[must_use]
    pub const fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField(_) | Self::InvalidFormat(_) | Self::OutOfRange(_)
        )
    }

    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    /// Map a transport error from either reqwest client flavour
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}
