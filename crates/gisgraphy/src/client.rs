//! Asynchronous Gisgraphy client
//!
//! One HTTP GET per call. Validation and configuration problems are returned
//! as errors before anything is sent; once a response arrives the call always
//! yields a result, degraded if the status or body was unusable.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, instrument};

use crate::config::GisgraphyConfig;
use crate::error::GisgraphyError;
use crate::exchange;
use crate::models::{
    AddressResult, AutocompleteResult, GeolocalizationFeatureResult, StreetDistanceResult,
};
use crate::request::{
    AutocompleteRequest, FindStreetRequest, GeocodeRequest, GeolocalizationRequest,
    ParseAddressRequest, ReverseGeocodeRequest, ServiceRequest,
};

/// The six Gisgraphy operations
#[async_trait]
pub trait GisgraphyService: Send + Sync {
    /// Geocode a free-form address
    async fn geocode(&self, request: &GeocodeRequest) -> Result<AddressResult, GisgraphyError>;

    /// Find the address closest to a coordinate
    async fn reverse_geocode(
        &self,
        request: &ReverseGeocodeRequest,
    ) -> Result<AddressResult, GisgraphyError>;

    /// Find streets around a coordinate
    async fn find_street(
        &self,
        request: &FindStreetRequest,
    ) -> Result<StreetDistanceResult, GisgraphyError>;

    /// Find places and features around a coordinate
    async fn geolocalization(
        &self,
        request: &GeolocalizationRequest,
    ) -> Result<GeolocalizationFeatureResult, GisgraphyError>;

    /// Full-text search with autocompletion
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<AutocompleteResult, GisgraphyError>;

    /// Split an address into its components
    async fn parse_address(
        &self,
        request: &ParseAddressRequest,
    ) -> Result<AddressResult, GisgraphyError>;
}

/// Default headers for both client flavours
pub(crate) fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Async client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct GisgraphyClient {
    client: Client,
    config: GisgraphyConfig,
}

impl GisgraphyClient {
    /// Create a new client
    ///
    /// The server URL is resolved on each call, so an unset or invalid URL
    /// surfaces as an error from the operation rather than here.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: GisgraphyConfig) -> Result<Self, GisgraphyError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(json_headers())
            .build()
            .map_err(|e| GisgraphyError::ConfigurationError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Shorthand for a server URL and optional API key with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_server(
        server_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, GisgraphyError> {
        Self::new(GisgraphyConfig::new(server_url, api_key))
    }

    /// The client configuration
    #[must_use]
    pub const fn config(&self) -> &GisgraphyConfig {
        &self.config
    }

    /// Run any request through the validate, send and normalize pipeline
    ///
    /// # Errors
    ///
    /// Returns pre-flight and configuration errors, or a transport error
    /// when no response was received.
    pub async fn execute<R: ServiceRequest>(&self, request: &R) -> Result<R::Output, GisgraphyError> {
        let prepared = exchange::prepare(&self.config, request)?;
        debug!(url = %prepared.log_url, "Sending Gisgraphy request");

        let response = self
            .client
            .get(&prepared.url)
            .send()
            .await
            .map_err(|e| GisgraphyError::from_transport(&e, self.config.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GisgraphyError::from_transport(&e, self.config.timeout_secs))?;

        Ok(exchange::normalize(status, &body))
    }
}

#[async_trait]
impl GisgraphyService for GisgraphyClient {
    #[instrument(skip(self))]
    async fn geocode(&self, request: &GeocodeRequest) -> Result<AddressResult, GisgraphyError> {
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        request: &ReverseGeocodeRequest,
    ) -> Result<AddressResult, GisgraphyError> {
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn find_street(
        &self,
        request: &FindStreetRequest,
    ) -> Result<StreetDistanceResult, GisgraphyError> {
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn geolocalization(
        &self,
        request: &GeolocalizationRequest,
    ) -> Result<GeolocalizationFeatureResult, GisgraphyError> {
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<AutocompleteResult, GisgraphyError> {
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn parse_address(
        &self,
        request: &ParseAddressRequest,
    ) -> Result<AddressResult, GisgraphyError> {
        self.execute(request).await
    }
}
