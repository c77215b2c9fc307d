//! Blocking Gisgraphy client
//!
//! Same operations and semantics as [`crate::GisgraphyClient`], waiting on
//! the calling thread. Like `reqwest::blocking`, it must not be created or
//! dropped from inside an async runtime.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::client::json_headers;
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

/// Blocking client backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct GisgraphyClient {
    client: Client,
    config: GisgraphyConfig,
}

impl GisgraphyClient {
    /// Create a new blocking client
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
    pub fn execute<R: ServiceRequest>(&self, request: &R) -> Result<R::Output, GisgraphyError> {
        let prepared = exchange::prepare(&self.config, request)?;
        debug!(url = %prepared.log_url, "Sending Gisgraphy request");

        let response = self
            .client
            .get(&prepared.url)
            .send()
            .map_err(|e| GisgraphyError::from_transport(&e, self.config.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| GisgraphyError::from_transport(&e, self.config.timeout_secs))?;

        Ok(exchange::normalize(status, &body))
    }

    /// Geocode a free-form address
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub fn geocode(&self, request: &GeocodeRequest) -> Result<AddressResult, GisgraphyError> {
        self.execute(request)
    }

    /// Find the address closest to a coordinate
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub fn reverse_geocode(
        &self,
        request: &ReverseGeocodeRequest,
    ) -> Result<AddressResult, GisgraphyError> {
        self.execute(request)
    }

    /// Find streets around a coordinate
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub fn find_street(
        &self,
        request: &FindStreetRequest,
    ) -> Result<StreetDistanceResult, GisgraphyError> {
        self.execute(request)
    }

    /// Find places and features around a coordinate
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub fn geolocalization(
        &self,
        request: &GeolocalizationRequest,
    ) -> Result<GeolocalizationFeatureResult, GisgraphyError> {
        self.execute(request)
    }

    /// Full-text search with autocompletion
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<AutocompleteResult, GisgraphyError> {
        self.execute(request)
    }

    /// Split an address into its components
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub fn parse_address(
        &self,
        request: &ParseAddressRequest,
    ) -> Result<AddressResult, GisgraphyError> {
        self.execute(request)
    }
}
