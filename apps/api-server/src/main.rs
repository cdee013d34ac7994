//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::cors::Cors;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    // Connect to the store before accepting traffic
    let (state, store) = AppState::connect(config.store.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to document store: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    // Start HTTP server
    let served = HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    store.close().await;
    tracing::info!("Server stopped");

    served
}
