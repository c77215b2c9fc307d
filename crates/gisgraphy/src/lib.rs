//! Client for the Gisgraphy geocoding web service
//!
//! Wraps the six Gisgraphy endpoints (geocoding, reverse geocoding, street
//! search, geolocalization, full-text autocomplete and address parsing) as
//! typed calls. Every call validates its arguments, issues one HTTP GET and
//! maps the JSON answer onto a result model.
//!
//! # Architecture
//!
//! Operation arguments are request types implementing [`ServiceRequest`].
//! [`GisgraphyClient`] (async, behind the [`GisgraphyService`] trait) and
//! [`blocking::GisgraphyClient`] run them through the same pipeline.
//!
//! Errors are reserved for bad arguments, bad configuration and missing
//! responses. A response with a non-success status, or one that does not
//! decode, comes back as a zero-result *degraded* result whose message holds
//! the raw body or the decode diagnostic; see [`ServiceResult`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gisgraphy::{GeocodeRequest, GisgraphyClient, GisgraphyService, ServiceResult};
//!
//! let client = GisgraphyClient::with_server("https://services.gisgraphy.com", None)?;
//! let result = client
//!     .geocode(&GeocodeRequest::new("Airport Terminal Road, 12205 Colonie").country("US"))
//!     .await?;
//!
//! if let Some(address) = result.first() {
//!     println!("{:?}, {:?}", address.latitude, address.longitude);
//! }
//! ```

pub mod blocking;
mod client;
mod config;
mod error;
mod exchange;
mod models;
mod query;
mod request;
mod validation;

pub use client::{GisgraphyClient, GisgraphyService};
pub use config::GisgraphyConfig;
pub use error::GisgraphyError;
pub use models::{
    Address, AddressResult, AlternateNames, Autocomplete, AutocompleteResponse,
    AutocompleteResult, BaseResult, Failure, GeolocalizationFeature,
    GeolocalizationFeatureResult, HouseNumber, ResponseHeader, ServiceResult, StreetDistance,
    StreetDistanceResult,
};
pub use query::QueryParams;
pub use request::{
    AutocompleteRequest, FindStreetRequest, GeocodeRequest, GeolocalizationRequest,
    ParseAddressRequest, ReverseGeocodeRequest, ServiceRequest, Style, endpoints,
};
