// Route exports
pub mod predict;

use actix_web::{error, web};

use crate::models::FailureResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(predict::configure);
}

/// Convert JSON payload errors into the failure envelope
///
/// A missing, truncated, or type-mismatched body never reaches a handler;
/// it is answered here with the same envelope shape the handlers produce.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    FailureResponse::bad_request(format!("Invalid request body: {}", err)).into()
}
