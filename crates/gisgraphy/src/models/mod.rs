//! Result models mirroring the Gisgraphy JSON responses
//!
//! Four families share the [`ServiceResult`] contract: address results
//! (geocoding, reverse geocoding, address parsing), street results,
//! geolocalization results and autocomplete results. Autocomplete keeps its
//! own nested `responseHeader`/`response` layout.

mod address;
mod autocomplete;
mod geolocalization;
mod street;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub use address::{Address, AddressResult, AlternateNames};
pub use autocomplete::{
    Autocomplete, AutocompleteResponse, AutocompleteResult, HouseNumber, ResponseHeader,
};
pub use geolocalization::{GeolocalizationFeature, GeolocalizationFeatureResult};
pub use street::{StreetDistance, StreetDistanceResult};

/// Why a result was substituted with a zero-result placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The server answered with a non-success status; the message holds the raw body
    HttpStatus {
        /// HTTP status code returned by the server
        status: u16,
    },
    /// The body could not be decoded into the result type; the message holds the reason
    Decode,
}

/// Count and timing fields shared by most result shapes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseResult {
    /// Server message, or the degradation reason for degraded results
    pub message: Option<String>,

    /// Number of results found
    #[serde(rename = "numFound")]
    pub results_found: u64,

    /// Server-side execution time in milliseconds
    #[serde(rename = "QTime")]
    pub execution_time_millis: u64,
}

impl BaseResult {
    /// Server-side execution time
    #[must_use]
    pub const fn execution_time(&self) -> Duration {
        Duration::from_millis(self.execution_time_millis)
    }

    pub(crate) fn degraded(message: String) -> Self {
        Self {
            message: Some(message),
            results_found: 0,
            execution_time_millis: 0,
        }
    }
}

/// Behaviour shared by every operation's result type
pub trait ServiceResult: DeserializeOwned + Default + Send + 'static {
    /// Number of results reported by the server (0 when degraded)
    fn results_found(&self) -> u64;

    /// The message or error text, if any
    fn message(&self) -> Option<&str>;

    /// The degradation cause, if this result is a placeholder
    fn failure(&self) -> Option<&Failure>;

    /// Whether this result replaced an unusable response
    fn is_degraded(&self) -> bool {
        self.failure().is_some()
    }

    /// Build a zero-result placeholder carrying `message` in the message/error field
    fn degraded(failure: Failure, message: String) -> Self;
}

/// Deserialize `null` as the type's default (for list fields)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Render models as indented JSON
macro_rules! impl_json_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

pub(crate) use impl_json_display;

impl_json_display!(BaseResult);
