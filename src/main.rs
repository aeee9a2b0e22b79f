mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::Predictor;
use crate::routes::predict::AppState;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting housing prediction service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the model artifact once per process; it is shared read-only
    // across workers and never reloaded per request.
    let predictor = match services::load_model(&settings.model.path) {
        Ok(model) => {
            info!(
                "Model loaded from {} ({} features)",
                settings.model.path,
                model.width()
            );
            Some(Predictor::new(Arc::new(model)))
        }
        Err(e) if settings.model.required => {
            error!(
                "Failed to load required model from {}: {}",
                settings.model.path, e
            );
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Model artifact required",
            ));
        }
        Err(e) => {
            error!("Failed to load model from {}: {}", settings.model.path, e);
            error!("Serving degraded - /predict will answer with \"Model not found\"");
            None
        }
    };

    // Build application state
    let app_state = AppState { predictor };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
