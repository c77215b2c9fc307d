//! Request preparation and response normalization shared by both clients

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::GisgraphyConfig;
use crate::error::GisgraphyError;
use crate::models::{Failure, ServiceResult};
use crate::query::QueryParams;
use crate::request::ServiceRequest;

/// Longest body excerpt quoted in decode diagnostics
const BODY_EXCERPT_CHARS: usize = 200;

/// A validated request ready to be sent
#[derive(Debug, Clone)]
pub(crate) struct PreparedRequest {
    pub url: String,
    /// Same URL with the API key masked
    pub log_url: String,
}

/// Validate the arguments, resolve the server and build the request URL
pub(crate) fn prepare<R: ServiceRequest>(
    config: &GisgraphyConfig,
    request: &R,
) -> Result<PreparedRequest, GisgraphyError> {
    request.validate()?;
    let base = config.base_url()?;

    let mut params = QueryParams::with_defaults(config);
    request.append_params(&mut params);

    Ok(PreparedRequest {
        url: format!("{base}{}{}", R::PATH, params.encode()),
        log_url: format!("{base}{}{}", R::PATH, params.encode_redacted()),
    })
}

/// Turn a received response into a result, degrading instead of failing
pub(crate) fn normalize<T: ServiceResult>(status: StatusCode, body: &str) -> T {
    if !status.is_success() {
        warn!(%status, "Gisgraphy returned a non-success status");
        return T::degraded(
            Failure::HttpStatus {
                status: status.as_u16(),
            },
            body.to_string(),
        );
    }

    match serde_json::from_str::<T>(body) {
        Ok(result) => {
            debug!(results_found = result.results_found(), "Decoded response");
            result
        },
        Err(e) => {
            warn!(error = %e, "Failed to decode Gisgraphy response");
            T::degraded(Failure::Decode, describe_decode_error(&e, body))
        },
    }
}

fn describe_decode_error(err: &serde_json::Error, body: &str) -> String {
    let category = match err.classify() {
        serde_json::error::Category::Io => "I/O",
        serde_json::error::Category::Syntax => "syntax",
        serde_json::error::Category::Data => "schema",
        serde_json::error::Category::Eof => "truncated body",
    };
    let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
    format!("Failed to decode response ({category} error): {err}\nResponse body: {excerpt}")
}
