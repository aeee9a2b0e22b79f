use crate::models::{EncodedFeatures, RegressionModel};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("feature count mismatch: model expects {expected} features, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("feature schema mismatch at position {position}: model expects {expected:?}, got {actual:?}")]
    SchemaMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("model artifact shape mismatch: {coefficients} coefficients for {values} feature values")]
    ShapeMismatch { coefficients: usize, values: usize },
}

/// Evaluates the loaded model over encoded feature vectors
///
/// The model's trained column order is an implicit contract with the
/// persisted artifact; the predictor checks it explicitly on every call
/// instead of silently mispredicting on a reordered vector.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: Arc<RegressionModel>,
}

impl Predictor {
    pub fn new(model: Arc<RegressionModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &RegressionModel {
        &self.model
    }

    /// Predict a price for an encoded feature vector
    pub fn predict(&self, features: &EncodedFeatures) -> Result<f64, InferenceError> {
        let expected = &self.model.feature_names;

        if features.names.len() != expected.len() {
            return Err(InferenceError::WidthMismatch {
                expected: expected.len(),
                actual: features.names.len(),
            });
        }

        for (position, (actual, expected)) in
            features.names.iter().zip(expected.iter()).enumerate()
        {
            if actual != expected {
                return Err(InferenceError::SchemaMismatch {
                    position,
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
        }

        if features.values.len() != self.model.coefficients.len() {
            return Err(InferenceError::ShapeMismatch {
                coefficients: self.model.coefficients.len(),
                values: features.values.len(),
            });
        }

        let weighted: f64 = self
            .model
            .coefficients
            .iter()
            .zip(&features.values)
            .map(|(coefficient, value)| coefficient * value)
            .sum();

        Ok(self.model.intercept + weighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> RegressionModel {
        RegressionModel {
            feature_names: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            coefficients: vec![2.0, 3.0, -1.0],
            intercept: 10.0,
        }
    }

    fn features(names: &[&str], values: &[f64]) -> EncodedFeatures {
        EncodedFeatures {
            names: names.iter().map(|n| n.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_predict_evaluates_linear_form() {
        let predictor = Predictor::new(Arc::new(test_model()));
        let result = predictor
            .predict(&features(&["a", "b", "c"], &[1.0, 2.0, 3.0]))
            .unwrap();
        // 10 + 2*1 + 3*2 - 1*3
        assert_eq!(result, 15.0);
    }

    #[test]
    fn test_predict_rejects_truncated_vector() {
        let predictor = Predictor::new(Arc::new(test_model()));
        let result = predictor.predict(&features(&["a", "b"], &[1.0, 2.0]));
        assert_eq!(
            result,
            Err(InferenceError::WidthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_predict_rejects_reordered_schema() {
        let predictor = Predictor::new(Arc::new(test_model()));
        let result = predictor.predict(&features(&["b", "a", "c"], &[2.0, 1.0, 3.0]));
        assert_eq!(
            result,
            Err(InferenceError::SchemaMismatch {
                position: 0,
                expected: "a".to_string(),
                actual: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_predict_rejects_malformed_artifact_shape() {
        let model = RegressionModel {
            feature_names: vec!["a".to_string(), "b".to_string()],
            coefficients: vec![2.0],
            intercept: 0.0,
        };
        let predictor = Predictor::new(Arc::new(model));
        let result = predictor.predict(&features(&["a", "b"], &[1.0, 2.0]));
        assert_eq!(
            result,
            Err(InferenceError::ShapeMismatch {
                coefficients: 1,
                values: 2
            })
        );
    }
}
