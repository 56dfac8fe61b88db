use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Request to Gradio API failed: {0}")]
    GatewayRequestFailure(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::GatewayRequestFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GATEWAY_REQUEST_FAILED",
                self.to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        tracing::error!("Request failed: {} - {}", code, detail);

        (
            status,
            Json(ErrorResponse {
                detail,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

/// Raised while loading configuration; stops the process before it binds.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
