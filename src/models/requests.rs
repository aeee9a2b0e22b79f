use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for a house price prediction
///
/// All eight numeric fields plus the categorical `ocean_proximity` are
/// required; a body missing any of them is rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = 0.0))]
    pub housing_median_age: f64,
    #[validate(range(min = 0.0))]
    pub total_rooms: f64,
    #[validate(range(min = 0.0))]
    pub total_bedrooms: f64,
    #[validate(range(min = 0.0))]
    pub population: f64,
    #[validate(range(min = 0.0))]
    pub households: f64,
    #[validate(range(min = 0.0))]
    pub median_income: f64,
    pub ocean_proximity: String,
}

impl PredictionRequest {
    /// Numeric attributes paired with their feature names, in the column
    /// order the model was trained with.
    pub fn numeric_features(&self) -> [(&'static str, f64); 8] {
        [
            ("longitude", self.longitude),
            ("latitude", self.latitude),
            ("housing_median_age", self.housing_median_age),
            ("total_rooms", self.total_rooms),
            ("total_bedrooms", self.total_bedrooms),
            ("population", self.population),
            ("households", self.households),
            ("median_income", self.median_income),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            longitude: -122.23,
            latitude: 37.88,
            housing_median_age: 41.0,
            total_rooms: 880.0,
            total_bedrooms: 129.0,
            population: 322.0,
            households: 126.0,
            median_income: 8.3,
            ocean_proximity: "NEAR BAY".to_string(),
        }
    }

    #[test]
    fn test_numeric_feature_order() {
        let request = sample_request();
        let features = request.numeric_features();
        assert_eq!(features[0], ("longitude", -122.23));
        assert_eq!(features[7], ("median_income", 8.3));
    }

    #[test]
    fn test_validation_rejects_out_of_range_coordinates() {
        let mut request = sample_request();
        request.latitude = 120.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_counts() {
        let mut request = sample_request();
        request.total_rooms = -1.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deserialization_requires_all_fields() {
        let body = r#"{"longitude": -122.23, "latitude": 37.88}"#;
        let parsed: Result<PredictionRequest, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }
}
