mod clients;
mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
mod views;

use clients::ItemsClient;
use config::Config;
use routes::create_app_routes;
use state::AppState;
use std::{panic, sync::Arc, time::Duration};
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Configuration comes first so its log level can seed the filter
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize tracing
    let default_filter = format!("shopping_frontend={},tower_http=debug", config.log_level);
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();

    if let Some(e) = config_error {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
    }

    info!("API Server URL: {}", config.api_base_url());
    info!("Frontend running on port: {}", config.port);
    info!("Debug mode: {}", config.debug);

    let backend = ItemsClient::new(
        config.api_base_url(),
        Duration::from_secs(config.backend_timeout_secs),
    )
    .unwrap_or_else(|e| panic!("Failed to build backend client: {}", e));

    let state = AppState::new(Arc::new(backend), config.api_base_url(), config.debug);
    let app_routes = create_app_routes(state);

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
