//! Housing API - House price prediction service
//!
//! This library serves predictions from a pre-trained regression model over
//! HTTP. It one-hot encodes the categorical `ocean_proximity` attribute,
//! checks the encoded vector against the model's trained feature schema,
//! and evaluates the model to a scalar price estimate.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    encode, feature_schema, EncodeError, InferenceError, Predictor, OCEAN_PROXIMITY_VOCABULARY,
};
pub use crate::models::{
    Category, EncodedFeatures, FailureResponse, PredictionRequest, PredictionResponse,
    RegressionModel,
};
