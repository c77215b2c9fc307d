//! Address models returned by geocoding, reverse geocoding and address parsing

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BaseResult, Failure, ServiceResult, impl_json_display, null_as_default};

/// Alternate names of a place or administrative area
///
/// The service sends either a language-keyed object (one name or several
/// per language) or a bare list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlternateNames {
    /// Language code to a single name
    Localized(BTreeMap<String, String>),
    /// Language code to several names
    LocalizedList(BTreeMap<String, Vec<String>>),
    /// Names without language information
    List(Vec<String>),
}

impl AlternateNames {
    /// All names for a language code, if the payload is language-keyed
    #[must_use]
    pub fn for_language(&self, lang: &str) -> Vec<&str> {
        match self {
            Self::Localized(map) => map.get(lang).map(String::as_str).into_iter().collect(),
            Self::LocalizedList(map) => map
                .get(lang)
                .map(|names| names.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            Self::List(_) => Vec::new(),
        }
    }
}

/// A postal address or geocoded location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    /// Internal identifier of the address
    pub id: Option<i64>,

    /// One of NONE, HOUSE_NUMBER, STREET, CITY, STATE, COUNTRY
    pub geocoding_level: Option<String>,

    #[serde(rename = "lat")]
    pub latitude: Option<f64>,

    #[serde(rename = "lng")]
    pub longitude: Option<f64>,

    /// How confident the parser is in this result
    pub confidence: Option<String>,

    /// Distance from the query location, when one was given
    pub distance: Option<f64>,

    pub name: Option<String>,
    pub recipient_name: Option<String>,
    pub house_number: Option<String>,
    pub house_number_info: Option<String>,
    pub street_name: Option<String>,
    pub street_type: Option<String>,
    pub city: Option<String>,
    pub city_subdivision: Option<String>,
    pub dependent_locality: Option<String>,
    pub post_town: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub quarter: Option<String>,
    pub zip_code: Option<String>,
    pub extra_info: Option<String>,
    pub suite_type: Option<String>,
    pub suite_number: Option<String>,

    #[serde(rename = "POBox")]
    pub po_box: Option<String>,

    #[serde(rename = "POBoxInfo")]
    pub po_box_info: Option<String>,

    #[serde(rename = "POBoxAgency")]
    pub po_box_agency: Option<String>,

    pub pre_direction: Option<String>,
    pub post_direction: Option<String>,
    pub street_name_intersection: Option<String>,
    pub street_type_intersection: Option<String>,
    pub pre_direction_intersection: Option<String>,
    pub post_direction_intersection: Option<String>,
    pub civic_number_suffix: Option<String>,
    pub floor: Option<String>,
    pub sector: Option<String>,
    pub quadrant: Option<String>,
    pub block: Option<String>,
    pub lote: Option<String>,
    pub country: Option<String>,

    #[serde(rename = "countrycode")]
    pub country_code: Option<String>,

    pub ward: Option<String>,

    /// Single-line formatted address
    #[serde(rename = "formatedFull")]
    pub formatted_full: Option<String>,

    pub name_alternates_localized: Option<AlternateNames>,
    pub adm1_name_alternates_localized: Option<AlternateNames>,
    pub adm2_name_alternates_localized: Option<AlternateNames>,
    pub country_name_alternates_localized: Option<AlternateNames>,
}

impl PartialEq for Address {
    /// Addresses with ids compare by id; otherwise only an address equals itself
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => std::ptr::eq(self, other),
        }
    }
}

/// Result of geocoding, reverse geocoding or address parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressResult {
    #[serde(flatten)]
    pub base: BaseResult,

    /// The address as understood by the parser, when the service returns it
    pub parsed_address: Option<Address>,

    #[serde(rename = "result", deserialize_with = "null_as_default")]
    pub results: Vec<Address>,

    #[serde(skip)]
    pub failure: Option<Failure>,
}

impl AddressResult {
    /// First result, if any
    #[must_use]
    pub fn first(&self) -> Option<&Address> {
        self.results.first()
    }
}

impl ServiceResult for AddressResult {
    fn results_found(&self) -> u64 {
        self.base.results_found
    }

    fn message(&self) -> Option<&str> {
        self.base.message.as_deref()
    }

    fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    fn degraded(failure: Failure, message: String) -> Self {
        Self {
            base: BaseResult::degraded(message),
            failure: Some(failure),
            ..Default::default()
        }
    }
}

impl_json_display!(Address, AddressResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_wire_names() {
        let json = r#"{
            "id": 167344877,
            "lat": 42.74511469046002,
            "lng": -73.80948451774645,
            "geocodingLevel": "STREET",
            "streetName": "Airport Terminal Road",
            "countrycode": "US",
            "formatedFull": "Airport Terminal Road, Colonie, US",
            "POBox": "12",
            "zipCode": "12205"
        }"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert_eq!(address.id, Some(167_344_877));
        assert_eq!(address.latitude, Some(42.745_114_690_460_02));
        assert_eq!(address.geocoding_level.as_deref(), Some("STREET"));
        assert_eq!(address.street_name.as_deref(), Some("Airport Terminal Road"));
        assert_eq!(address.country_code.as_deref(), Some("US"));
        assert_eq!(
            address.formatted_full.as_deref(),
            Some("Airport Terminal Road, Colonie, US")
        );
        assert_eq!(address.po_box.as_deref(), Some("12"));
        assert_eq!(address.zip_code.as_deref(), Some("12205"));
    }

    #[test]
    fn test_address_equality_by_id() {
        let a = Address {
            id: Some(1),
            city: Some("Colonie".to_string()),
            ..Default::default()
        };
        let b = Address {
            id: Some(1),
            city: Some("Albany".to_string()),
            ..Default::default()
        };
        let c = Address {
            id: Some(2),
            ..Default::default()
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_address_without_id_equals_only_itself() {
        let a = Address::default();
        let b = Address::default();
        assert_eq!(a, a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_alternate_names_shapes() {
        let localized: AlternateNames =
            serde_json::from_str(r#"{"fr": "Aéroport", "de": "Flughafen"}"#).unwrap();
        assert_eq!(localized.for_language("fr"), vec!["Aéroport"]);

        let list: AlternateNames =
            serde_json::from_str(r#"{"en": ["Albany", "ALB"]}"#).unwrap();
        assert_eq!(list.for_language("en"), vec!["Albany", "ALB"]);

        let plain: AlternateNames = serde_json::from_str(r#"["Albany", "ALB"]"#).unwrap();
        assert_eq!(plain, AlternateNames::List(vec!["Albany".into(), "ALB".into()]));
        assert!(plain.for_language("en").is_empty());
    }

    #[test]
    fn test_address_result_null_results() {
        let result: AddressResult =
            serde_json::from_str(r#"{"numFound": 0, "QTime": 3, "result": null}"#).unwrap();
        assert!(result.results.is_empty());
        assert_eq!(result.base.execution_time_millis, 3);
    }

    #[test]
    fn test_address_result_degraded() {
        let result = AddressResult::degraded(
            Failure::HttpStatus { status: 500 },
            "server exploded".to_string(),
        );
        assert_eq!(result.results_found(), 0);
        assert_eq!(result.message(), Some("server exploded"));
        assert!(result.is_degraded());
        assert!(result.results.is_empty());
    }
}
