//! Street search models

use serde::{Deserialize, Serialize};

use super::{BaseResult, Failure, ServiceResult, impl_json_display, null_as_default};

/// A street segment near the queried point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreetDistance {
    pub name: Option<String>,

    /// Distance in meters from the queried point
    pub distance: Option<f64>,

    #[serde(rename = "gid")]
    pub id: Option<i64>,

    #[serde(rename = "openstreetmapId")]
    pub open_street_map_id: Option<i64>,

    pub street_type: Option<String>,
    pub one_way: bool,
    pub country_code: Option<String>,

    /// Segment length in meters
    pub length: Option<f64>,

    #[serde(rename = "lat")]
    pub latitude: Option<f64>,

    #[serde(rename = "lng")]
    pub longitude: Option<f64>,

    pub is_in: Option<String>,
    pub is_in_place: Option<String>,
    pub is_in_adm: Option<String>,
    pub is_in_zip: Option<String>,
    pub fully_qualified_address: Option<String>,
}

/// Result of a street search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetDistanceResult {
    #[serde(flatten)]
    pub base: BaseResult,

    /// Error text reported by the service or substituted on degradation
    pub error: Option<String>,

    #[serde(rename = "result", deserialize_with = "null_as_default")]
    pub results: Vec<StreetDistance>,

    #[serde(skip)]
    pub failure: Option<Failure>,
}

impl StreetDistanceResult {
    /// First (closest) street, if any
    #[must_use]
    pub fn first(&self) -> Option<&StreetDistance> {
        self.results.first()
    }
}

impl ServiceResult for StreetDistanceResult {
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

impl_json_display!(StreetDistance, StreetDistanceResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_distance_parsing() {
        let json = r#"{
            "numFound": 1,
            "QTime": 12,
            "result": [{
                "name": "Airport Terminal Road",
                "distance": 0.21,
                "gid": 42,
                "openstreetmapId": 5583598,
                "streetType": "UNCLASSIFIED",
                "oneWay": false,
                "countryCode": "US",
                "length": 393.5,
                "isIn": "Colonie"
            }]
        }"#;
        let result: StreetDistanceResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.results_found(), 1);
        let street = result.first().unwrap();
        assert_eq!(street.id, Some(42));
        assert_eq!(street.open_street_map_id, Some(5_583_598));
        assert!(!street.one_way);
        assert_eq!(street.is_in.as_deref(), Some("Colonie"));
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_one_way_defaults_to_false() {
        let street: StreetDistance = serde_json::from_str(r#"{"name": "Main"}"#).unwrap();
        assert!(!street.one_way);
    }

    #[test]
    fn test_degraded_sets_error_field() {
        let result = StreetDistanceResult::degraded(Failure::Decode, "bad json".to_string());
        assert_eq!(result.error.as_deref(), Some("bad json"));
        assert!(result.base.message.is_none());
        assert_eq!(result.message(), Some("bad json"));
        assert_eq!(result.results_found(), 0);
    }
}
