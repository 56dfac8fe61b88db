pub mod payload;

use std::error::Error as _;

use axum::body::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::config::{GradioConfig, GRADIO_API_KEY};
use crate::error::{AppError, ConfigError};

use payload::Prediction;

pub use payload::{CustomVoicesPrediction, OneFilePrediction, PresetVoicePrediction};

/// Forwards prediction requests to the remote Gradio service.
///
/// One POST per call, no retries. The response body is returned untouched whatever the
/// remote status was; only transport failures become errors.
pub struct GradioClient {
    http: reqwest::Client,
    predict_url: String,
    auth_header: HeaderValue,
}

impl GradioClient {
    pub fn new(config: &GradioConfig) -> Result<Self, ConfigError> {
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ConfigError::Invalid {
                var: GRADIO_API_KEY,
                reason: "not usable in an Authorization header".to_string(),
            })?;
        auth_header.set_sensitive(true);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            http,
            predict_url: config.predict_url(),
            auth_header,
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    pub async fn predict<P: Prediction>(&self, payload: &P) -> Result<Bytes, AppError> {
        let fn_index = payload.fn_index();
        tracing::debug!("Forwarding prediction fn_index={} to {}", fn_index, self.predict_url);

        let response = self
            .http
            .post(&self.predict_url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .json(payload)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Gradio API answered {} for fn_index={}, relaying body as-is",
                status,
                fn_index
            );
        }

        response.bytes().await.map_err(transport_failure)
    }
}

fn transport_failure(err: reqwest::Error) -> AppError {
    AppError::GatewayRequestFailure(describe(&err))
}

/// Display text of the error followed by its source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
