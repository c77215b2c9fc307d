//! Full-text / autocomplete models
//!
//! Unlike the other results, counts live under `response` and timing under
//! `responseHeader`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Failure, ServiceResult, impl_json_display, null_as_default};

/// A house number attached to an autocompleted street
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseNumber {
    /// Location of the house number as `lat,lng` text
    pub location: Option<String>,
    pub number: Option<String>,
}

impl PartialEq for HouseNumber {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

/// One full-text search document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Autocomplete {
    pub name: Option<String>,

    /// Relevance score of this document
    pub score: Option<f64>,

    #[serde(deserialize_with = "null_as_default")]
    pub name_alternates: Vec<String>,
    pub feature_class: Option<String>,
    pub feature_code: Option<String>,
    pub feature_id: Option<i64>,

    #[serde(rename = "name_ascii")]
    pub ascii_name: Option<String>,

    pub elevation: Option<i64>,
    pub gtopo30: Option<i64>,
    pub timezone: Option<String>,
    pub fully_qualified_name: Option<String>,

    #[serde(rename = "placetype")]
    pub place_type: Option<String>,

    pub population: Option<i64>,

    #[serde(rename = "lat")]
    pub latitude: Option<f64>,

    #[serde(rename = "lng")]
    pub longitude: Option<f64>,

    pub adm1_code: Option<String>,
    pub adm2_code: Option<String>,
    pub adm3_code: Option<String>,
    pub adm4_code: Option<String>,
    pub adm1_name: Option<String>,
    pub adm2_name: Option<String>,
    pub adm3_name: Option<String>,
    pub adm4_name: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub adm1_names_alternate: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub adm2_names_alternate: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub adm3_names_alternate: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub adm4_names_alternate: Vec<String>,

    pub continent: Option<String>,
    pub currency_code: Option<String>,
    pub currency_name: Option<String>,
    pub fips_code: Option<String>,

    #[serde(rename = "isoalpha2_country_code")]
    pub iso3166_alpha2_code: Option<String>,
    #[serde(rename = "isoalpha3_country_code")]
    pub iso3166_alpha3_code: Option<String>,

    pub postal_code_mask: Option<String>,
    pub postal_code_regex: Option<String>,
    pub phone_prefix: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<String>,

    #[serde(rename = "tld")]
    pub top_level_domain: Option<String>,

    pub capital_name: Option<String>,
    pub level: Option<i64>,
    pub area: Option<f64>,

    #[serde(rename = "zipcodes", deserialize_with = "null_as_default")]
    pub zip_codes: Vec<String>,

    pub country_code: Option<String>,
    pub country_name: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub country_name_alternate: Vec<String>,

    pub google_map_url: Option<String>,
    pub yahoo_map_url: Option<String>,
    #[serde(rename = "openstreetmap_map_url")]
    pub open_street_map_url: Option<String>,
    pub country_flag_url: Option<String>,

    pub one_way: Option<bool>,
    pub length: Option<f64>,
    pub street_type: Option<String>,

    #[serde(rename = "openstreetmap_id")]
    pub open_street_map_id: Option<i64>,

    pub is_in: Option<String>,
    pub is_in_place: Option<String>,
    pub is_in_adm: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_in_zip: Vec<String>,
    pub fully_qualified_address: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub house_numbers: Vec<HouseNumber>,

    #[serde(alias = "mucipality")]
    pub municipality: Option<bool>,

    pub amenity: Option<String>,
}

/// Status and timing header of an autocomplete response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseHeader {
    pub status: Option<i64>,

    /// Server-side execution time in milliseconds
    #[serde(rename = "QTime")]
    pub execution_time_millis: u64,
}

impl ResponseHeader {
    /// Server-side execution time
    #[must_use]
    pub const fn execution_time(&self) -> Duration {
        Duration::from_millis(self.execution_time_millis)
    }
}

/// Documents and counts of an autocomplete response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteResponse {
    #[serde(rename = "numFound")]
    pub results_found: u64,

    pub start: u64,

    #[serde(rename = "maxScore")]
    pub max_score: Option<f64>,

    #[serde(rename = "docs", deserialize_with = "null_as_default")]
    pub results: Vec<Autocomplete>,
}

/// Result of an autocomplete / full-text search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteResult {
    #[serde(rename = "responseHeader")]
    pub response_header: ResponseHeader,

    pub response: AutocompleteResponse,

    /// Only set on degraded results; never read from the wire
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip)]
    pub failure: Option<Failure>,
}

impl AutocompleteResult {
    /// First (best scoring) document, if any
    #[must_use]
    pub fn first(&self) -> Option<&Autocomplete> {
        self.response.results.first()
    }
}

impl ServiceResult for AutocompleteResult {
    fn results_found(&self) -> u64 {
        self.response.results_found
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    fn degraded(failure: Failure, message: String) -> Self {
        Self {
            message: Some(message),
            failure: Some(failure),
            ..Default::default()
        }
    }
}

impl_json_display!(
    HouseNumber,
    Autocomplete,
    ResponseHeader,
    AutocompleteResponse,
    AutocompleteResult
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autocomplete_parsing() {
        let json = r#"{
            "responseHeader": {"status": 0, "QTime": 7},
            "response": {
                "numFound": 1,
                "start": 0,
                "maxScore": 9.5,
                "docs": [{
                    "name": "Albany International Airport",
                    "score": 9.5,
                    "name_ascii": "Albany International Airport",
                    "placetype": "Airport",
                    "isoalpha2_country_code": "US",
                    "zipcodes": ["12211"],
                    "house_numbers": [{"location": "42.7,-73.8", "number": "1"}],
                    "mucipality": false,
                    "openstreetmap_id": 5583598
                }]
            }
        }"#;
        let result: AutocompleteResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.results_found(), 1);
        assert_eq!(result.response_header.execution_time(), Duration::from_millis(7));
        let doc = result.first().unwrap();
        assert_eq!(doc.ascii_name.as_deref(), Some("Albany International Airport"));
        assert_eq!(doc.place_type.as_deref(), Some("Airport"));
        assert_eq!(doc.iso3166_alpha2_code.as_deref(), Some("US"));
        assert_eq!(doc.zip_codes, vec!["12211".to_string()]);
        assert_eq!(doc.house_numbers.len(), 1);
        assert_eq!(doc.municipality, Some(false));
        assert_eq!(doc.open_street_map_id, Some(5_583_598));
        assert_eq!(result.response.max_score, doc.score);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_municipality_correct_spelling() {
        let doc: Autocomplete = serde_json::from_str(r#"{"municipality": true}"#).unwrap();
        assert_eq!(doc.municipality, Some(true));
    }

    #[test]
    fn test_message_not_read_from_wire() {
        let result: AutocompleteResult =
            serde_json::from_str(r#"{"message": "ignored", "response": {"numFound": 0}}"#)
                .unwrap();
        assert!(result.message.is_none());
    }

    #[test]
    fn test_house_number_equality_by_location() {
        let a = HouseNumber {
            location: Some("42.7,-73.8".to_string()),
            number: Some("1".to_string()),
        };
        let b = HouseNumber {
            location: Some("42.7,-73.8".to_string()),
            number: Some("3".to_string()),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_degraded() {
        let result = AutocompleteResult::degraded(
            Failure::HttpStatus { status: 503 },
            "maintenance".to_string(),
        );
        assert_eq!(result.results_found(), 0);
        assert_eq!(result.message(), Some("maintenance"));
        assert!(result.first().is_none());
        assert!(result.to_string().contains("maintenance"));
    }
}
