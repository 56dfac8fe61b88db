use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod gradio;

use api::routes::{create_router, AppState};
use config::GatewayConfig;
use gradio::GradioClient;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the variables may come from the real environment
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let gradio = match GradioClient::new(&config.gradio) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let addr = config.server.addr();

    tracing::info!("Gradio TTS Gateway v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Forwarding predictions to {}", gradio.predict_url());
    match config.gradio.timeout {
        Some(timeout) => tracing::info!("Outbound timeout: {:?}", timeout),
        None => tracing::info!("Outbound timeout: transport default"),
    }

    let state = Arc::new(AppState { gradio });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
