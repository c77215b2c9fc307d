//! Typed arguments for the six service operations
//!
//! Each request knows its endpoint, how to check its arguments and how to
//! turn them into query parameters. Both clients drive them through the same
//! pipeline, so blocking and async calls cannot drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GisgraphyError;
use crate::models::{
    AddressResult, AutocompleteResult, GeolocalizationFeatureResult, ServiceResult,
    StreetDistanceResult,
};
use crate::query::QueryParams;
use crate::validation;

/// Endpoint paths relative to the server URL
pub mod endpoints {
    pub const GEOCODING: &str = "/geocoding/geocode";
    pub const REVERSE_GEOCODING: &str = "/reversegeocoding/reversegeocode";
    pub const STREET: &str = "/street/find";
    pub const GEOLOCALIZATION: &str = "/geoloc/search";
    pub const FULLTEXT: &str = "/fulltext/search";
    pub const ADDRESS_PARSER: &str = "/addressparser/parse";
}

/// A single service operation
pub trait ServiceRequest: Send + Sync {
    /// Result model the endpoint answers with
    type Output: ServiceResult;

    /// Endpoint path, see [`endpoints`]
    const PATH: &'static str;

    /// Check the arguments without touching the network
    fn validate(&self) -> Result<(), GisgraphyError>;

    /// Append the operation-specific parameters after the base ones
    fn append_params(&self, params: &mut QueryParams);
}

/// Output verbosity of autocomplete results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Style {
    Short,
    #[default]
    Medium,
    Long,
    Full,
}

impl Style {
    /// Wire name of the style
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Medium => "MEDIUM",
            Self::Long => "LONG",
            Self::Full => "FULL",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = GisgraphyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SHORT" => Ok(Self::Short),
            "MEDIUM" => Ok(Self::Medium),
            "LONG" => Ok(Self::Long),
            "FULL" => Ok(Self::Full),
            other => Err(GisgraphyError::InvalidFormat(format!(
                "style '{other}' must be one of SHORT, MEDIUM, LONG, FULL"
            ))),
        }
    }
}

/// Forward geocoding of a free-form address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeRequest {
    pub address: String,
    pub country: Option<String>,
    /// Whether the address is a well-formed postal address; omitted when unset
    pub postal: Option<bool>,
}

impl GeocodeRequest {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// ISO 3166 alpha-2 country hint
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Declare whether the address follows the postal format of its country
    #[must_use]
    pub fn postal(mut self, postal: bool) -> Self {
        self.postal = Some(postal);
        self
    }
}

impl ServiceRequest for GeocodeRequest {
    type Output = AddressResult;
    const PATH: &'static str = endpoints::GEOCODING;

    fn validate(&self) -> Result<(), GisgraphyError> {
        validation::require_text("address", &self.address)?;
        validation::country_code(self.country.as_deref())
    }

    fn append_params(&self, params: &mut QueryParams) {
        params.push("address", self.address.as_str());
        params.push_opt("country", self.country.as_deref());
        if let Some(postal) = self.postal {
            params.push_bool("postal", postal);
        }
    }
}

/// Address lookup for a coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseGeocodeRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl ReverseGeocodeRequest {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl ServiceRequest for ReverseGeocodeRequest {
    type Output = AddressResult;
    const PATH: &'static str = endpoints::REVERSE_GEOCODING;

    fn validate(&self) -> Result<(), GisgraphyError> {
        validation::latitude(self.latitude)?;
        validation::longitude(self.longitude)
    }

    fn append_params(&self, params: &mut QueryParams) {
        params.push_number("lat", self.latitude);
        params.push_number("lng", self.longitude);
    }
}

/// Streets around a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct FindStreetRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters
    pub radius: f64,
    /// Only return one-way streets
    pub one_way: bool,
    /// Include the distance to each street
    pub distance: bool,
    pub street_type: Option<String>,
}

impl FindStreetRequest {
    pub const DEFAULT_RADIUS: f64 = 1000.0;

    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: Self::DEFAULT_RADIUS,
            one_way: false,
            distance: true,
            street_type: None,
        }
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn one_way(mut self, one_way: bool) -> Self {
        self.one_way = one_way;
        self
    }

    #[must_use]
    pub fn distance(mut self, distance: bool) -> Self {
        self.distance = distance;
        self
    }

    /// Street type filter (e.g. `MOTORWAY`, `RESIDENTIAL`)
    #[must_use]
    pub fn street_type(mut self, street_type: impl Into<String>) -> Self {
        self.street_type = Some(street_type.into());
        self
    }
}

impl ServiceRequest for FindStreetRequest {
    type Output = StreetDistanceResult;
    const PATH: &'static str = endpoints::STREET;

    fn validate(&self) -> Result<(), GisgraphyError> {
        validation::latitude(self.latitude)?;
        validation::longitude(self.longitude)?;
        validation::radius(self.radius)
    }

    fn append_params(&self, params: &mut QueryParams) {
        params.push_number("lat", self.latitude);
        params.push_number("lng", self.longitude);
        params.push_number("radius", self.radius);
        params.push_bool("oneway", self.one_way);
        params.push_bool("distance", self.distance);
        params.push_opt("streettype", self.street_type.as_deref());
    }
}

/// Places and features around a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocalizationRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters
    pub radius: f64,
    /// Include the distance to each feature
    pub distance: bool,
    pub place_type: Option<String>,
}

impl GeolocalizationRequest {
    pub const DEFAULT_RADIUS: f64 = 10_000.0;

    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: Self::DEFAULT_RADIUS,
            distance: true,
            place_type: None,
        }
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn distance(mut self, distance: bool) -> Self {
        self.distance = distance;
        self
    }

    /// Place type filter (e.g. `City`, `Airport`)
    #[must_use]
    pub fn place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }
}

impl ServiceRequest for GeolocalizationRequest {
    type Output = GeolocalizationFeatureResult;
    const PATH: &'static str = endpoints::GEOLOCALIZATION;

    fn validate(&self) -> Result<(), GisgraphyError> {
        validation::latitude(self.latitude)?;
        validation::longitude(self.longitude)?;
        validation::radius(self.radius)
    }

    fn append_params(&self, params: &mut QueryParams) {
        params.push_number("lat", self.latitude);
        params.push_number("lng", self.longitude);
        params.push_number("radius", self.radius);
        params.push_bool("distance", self.distance);
        params.push_opt("placetype", self.place_type.as_deref());
    }
}

/// Full-text search with autocompletion
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteRequest {
    pub text: String,
    pub all_words_required: bool,
    pub spellchecking: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Search radius in meters around the optional location
    pub radius: f64,
    pub suggest: bool,
    pub style: Style,
    pub country: Option<String>,
    pub lang: Option<String>,
}

impl AutocompleteRequest {
    pub const DEFAULT_RADIUS: f64 = 10_000.0;

    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            all_words_required: false,
            spellchecking: None,
            latitude: None,
            longitude: None,
            radius: Self::DEFAULT_RADIUS,
            suggest: false,
            style: Style::default(),
            country: None,
            lang: None,
        }
    }

    #[must_use]
    pub fn all_words_required(mut self, required: bool) -> Self {
        self.all_words_required = required;
        self
    }

    #[must_use]
    pub fn spellchecking(mut self, spellchecking: impl Into<String>) -> Self {
        self.spellchecking = Some(spellchecking.into());
        self
    }

    /// Bias results around a point
    #[must_use]
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn suggest(mut self, suggest: bool) -> Self {
        self.suggest = suggest;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

impl ServiceRequest for AutocompleteRequest {
    type Output = AutocompleteResult;
    const PATH: &'static str = endpoints::FULLTEXT;

    fn validate(&self) -> Result<(), GisgraphyError> {
        validation::require_text("text", &self.text)?;
        validation::optional_location(self.latitude, self.longitude)?;
        validation::radius(self.radius)?;
        validation::country_code(self.country.as_deref())?;
        validation::language_code(self.lang.as_deref())
    }

    fn append_params(&self, params: &mut QueryParams) {
        params.push("q", self.text.as_str());
        params.push_bool("allwordsrequired", self.all_words_required);
        params.push_opt("spellchecking", self.spellchecking.as_deref());
        if let (Some(lat), Some(lng)) = (self.latitude, self.longitude) {
            params.push_number("lat", lat);
            params.push_number("lng", lng);
        }
        params.push_number("radius", self.radius);
        params.push_bool("suggest", self.suggest);
        params.push("style", self.style.as_str());
        params.push_opt("country", self.country.as_deref());
        params.push_opt("lang", self.lang.as_deref());
    }
}

/// Split a free-form address into its components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseAddressRequest {
    pub address: String,
    pub country: Option<String>,
}

impl ParseAddressRequest {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            country: None,
        }
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

impl ServiceRequest for ParseAddressRequest {
    type Output = AddressResult;
    const PATH: &'static str = endpoints::ADDRESS_PARSER;

    fn validate(&self) -> Result<(), GisgraphyError> {
        validation::require_text("address", &self.address)?;
        validation::country_code(self.country.as_deref())
    }

    fn append_params(&self, params: &mut QueryParams) {
        params.push("address", self.address.as_str());
        params.push_opt("country", self.country.as_deref());
    }
}
