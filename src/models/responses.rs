use actix_web::{error, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// Outcome tag carried by every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Success,
    Failure,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Success => write!(f, "Success"),
            Category::Failure => write!(f, "Failure"),
        }
    }
}

/// Response for a successful prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub message: String,
    pub category: Category,
    pub status: u16,
}

impl PredictionResponse {
    pub fn new(prediction: f64) -> Self {
        Self {
            prediction,
            message: "Prediction successful".to_string(),
            category: Category::Success,
            status: 200,
        }
    }
}

/// Failure envelope used for every non-success outcome
///
/// The `status` field mirrors the HTTP status code so clients reading
/// only the body still see the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub message: String,
    pub category: Category,
    pub status: u16,
}

impl FailureResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: Category::Failure,
            status: 400,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: Category::Failure,
            status: 500,
        }
    }

    pub fn model_not_found() -> Self {
        Self::bad_request("Model not found")
    }
}

impl std::fmt::Display for FailureResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.category, self.status, self.message)
    }
}

impl std::error::Error for FailureResponse {}

impl error::ResponseError for FailureResponse {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let response = PredictionResponse::new(452600.0);
        assert_eq!(response.status, 200);
        assert_eq!(response.category, Category::Success);
        assert_eq!(response.message, "Prediction successful");
    }

    #[test]
    fn test_model_not_found_envelope() {
        let envelope = FailureResponse::model_not_found();
        assert_eq!(envelope.message, "Model not found");
        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.category, Category::Failure);
    }

    #[test]
    fn test_category_serializes_as_plain_string() {
        let json = serde_json::to_string(&Category::Failure).unwrap();
        assert_eq!(json, r#""Failure""#);
    }
}
