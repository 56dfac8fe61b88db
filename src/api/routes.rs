use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::gradio::GradioClient;

pub struct AppState {
    pub gradio: GradioClient,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/preset-voice", get(handlers::preset_voice))
        .route("/custom-voices", get(handlers::custom_voices))
        .route("/predict-from-one-file", get(handlers::predict_from_one_file))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
