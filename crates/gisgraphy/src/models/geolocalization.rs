//! Geolocalization (nearby feature search) models

use serde::{Deserialize, Serialize};

use super::{BaseResult, Failure, ServiceResult, impl_json_display, null_as_default};

/// A place or feature near the queried point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeolocalizationFeature {
    /// Distance in meters from the queried point
    pub distance: Option<f64>,
    pub name: Option<String>,
    pub ascii_name: Option<String>,

    pub adm1_code: Option<String>,
    pub adm2_code: Option<String>,
    pub adm3_code: Option<String>,
    pub adm4_code: Option<String>,
    pub adm5_code: Option<String>,
    pub adm1_name: Option<String>,
    pub adm2_name: Option<String>,
    pub adm3_name: Option<String>,
    pub adm4_name: Option<String>,
    pub adm5_name: Option<String>,

    pub country_code: Option<String>,
    pub elevation: Option<i64>,
    pub feature_class: Option<String>,
    pub feature_code: Option<String>,
    pub feature_id: Option<i64>,
    pub gtopo30: Option<i64>,
    pub population: Option<i64>,
    pub timezone: Option<String>,

    #[serde(rename = "lat")]
    pub latitude: Option<f64>,

    #[serde(rename = "lng")]
    pub longitude: Option<f64>,

    pub place_type: Option<String>,

    // Street features only
    pub one_way: Option<bool>,
    pub street_type: Option<String>,
    #[serde(rename = "openstreetmapId")]
    pub open_street_map_id: Option<i64>,
    pub length: Option<f64>,

    #[serde(deserialize_with = "null_as_default")]
    pub zip_codes: Vec<String>,

    #[serde(rename = "google_map_url")]
    pub google_map_url: Option<String>,
    #[serde(rename = "yahoo_map_url")]
    pub yahoo_map_url: Option<String>,
    #[serde(rename = "openstreetmap_map_url")]
    pub open_street_map_url: Option<String>,
    #[serde(rename = "country_flag_url")]
    pub country_flag_url: Option<String>,

    // Country features only
    pub level: Option<i64>,
    pub area: Option<f64>,
    #[serde(rename = "tld")]
    pub top_level_domain: Option<String>,
    pub capital_name: Option<String>,
    pub continent: Option<String>,
    pub postal_code_regex: Option<String>,
    pub postal_code_mask: Option<String>,
    pub currency_code: Option<String>,
    pub currency_name: Option<String>,
    pub equivalent_fips_code: Option<String>,
    pub fips_code: Option<String>,
    #[serde(rename = "iso3166Alpha2Code")]
    pub iso3166_alpha2_code: Option<String>,
    #[serde(rename = "iso3166Alpha3Code")]
    pub iso3166_alpha3_code: Option<String>,
    #[serde(rename = "iso3166NumericCode")]
    pub iso3166_numeric_code: Option<String>,
    pub phone_prefix: Option<String>,

    pub is_in: Option<String>,
    pub is_in_place: Option<String>,
    pub is_in_adm: Option<String>,
    pub is_in_zip: Option<String>,
    pub amenity: Option<String>,
    pub fully_qualified_address: Option<String>,
}

/// Result of a geolocalization search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocalizationFeatureResult {
    #[serde(flatten)]
    pub base: BaseResult,

    /// Error text reported by the service or substituted on degradation
    pub error: Option<String>,

    #[serde(rename = "result", deserialize_with = "null_as_default")]
    pub results: Vec<GeolocalizationFeature>,

    #[serde(skip)]
    pub failure: Option<Failure>,
}

impl GeolocalizationFeatureResult {
    /// First (closest) feature, if any
    #[must_use]
    pub fn first(&self) -> Option<&GeolocalizationFeature> {
        self.results.first()
    }
}

impl ServiceResult for GeolocalizationFeatureResult {
    fn results_found(&self) -> u64 {
        self.base.results_found
    }

    fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.base.message.as_deref())
    }

    fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    fn degraded(failure: Failure, message: String) -> Self {
        Self {
            error: Some(message),
            failure: Some(failure),
            ..Default::default()
        }
    }
}

impl_json_display!(GeolocalizationFeature, GeolocalizationFeatureResult);
