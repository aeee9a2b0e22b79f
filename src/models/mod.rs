// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{EncodedFeatures, RegressionModel};
pub use requests::PredictionRequest;
pub use responses::{Category, FailureResponse, HealthResponse, PredictionResponse};
