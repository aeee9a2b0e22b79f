use serde::{Deserialize, Serialize};

/// Pre-trained regression model artifact
///
/// Deserialized once at process start and shared read-only across workers.
/// `feature_names` carries the exact column order the model was trained
/// with; predictions are only valid for vectors in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl RegressionModel {
    /// Number of features the model expects
    pub fn width(&self) -> usize {
        self.feature_names.len()
    }
}

/// Encoded feature vector ready for inference
///
/// Names and values are kept parallel so the predictor can check the
/// schema positionally before evaluating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatures {
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

impl EncodedFeatures {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a feature value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.values[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_width() {
        let model = RegressionModel {
            feature_names: vec!["a".to_string(), "b".to_string()],
            coefficients: vec![1.0, 2.0],
            intercept: 0.5,
        };
        assert_eq!(model.width(), 2);
    }

    #[test]
    fn test_feature_lookup() {
        let features = EncodedFeatures {
            names: vec!["latitude".to_string(), "longitude".to_string()],
            values: vec![37.88, -122.23],
        };
        assert_eq!(features.get("latitude"), Some(37.88));
        assert_eq!(features.get("missing"), None);
        assert_eq!(features.len(), 2);
    }
}
