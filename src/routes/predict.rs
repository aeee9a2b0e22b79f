use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{encode, Predictor};
use crate::models::{FailureResponse, HealthResponse, PredictionRequest, PredictionResponse};

/// Application state shared across all handlers
///
/// The predictor wraps the model loaded once at startup; `None` means the
/// process came up without an artifact and every prediction is refused.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Option<Predictor>,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.predictor.is_some() {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Prediction endpoint
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "longitude": -122.23,
///   "latitude": 37.88,
///   "housing_median_age": 41,
///   "total_rooms": 880,
///   "total_bedrooms": 129,
///   "population": 322,
///   "households": 126,
///   "median_income": 8.3,
///   "ocean_proximity": "NEAR BAY"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictionRequest>,
) -> impl Responder {
    let Some(predictor) = state.predictor.as_ref() else {
        tracing::error!("Prediction requested but no model is loaded");
        return HttpResponse::BadRequest().json(FailureResponse::model_not_found());
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {}", errors);
        return HttpResponse::BadRequest()
            .json(FailureResponse::bad_request(format!("Invalid request: {}", errors)));
    }

    let features = match encode(&req) {
        Ok(features) => features,
        Err(e) => {
            tracing::info!("Encoding failed: {}", e);
            return HttpResponse::BadRequest().json(FailureResponse::bad_request(e.to_string()));
        }
    };

    match predictor.predict(&features) {
        Ok(prediction) => {
            tracing::info!(
                "Prediction served: {:.0} ({})",
                prediction,
                req.ocean_proximity
            );
            HttpResponse::Ok().json(PredictionResponse::new(prediction))
        }
        Err(e) => {
            tracing::error!("Inference failed: {}", e);
            HttpResponse::InternalServerError().json(FailureResponse::internal(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_missing_model_envelope() {
        let envelope = FailureResponse::model_not_found();
        assert_eq!(envelope.category, Category::Failure);
        assert_eq!(envelope.status, 400);
    }
}
