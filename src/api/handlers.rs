use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::query::QueryParams;
use super::HealthResponse;
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::gradio::{CustomVoicesPrediction, OneFilePrediction, PresetVoicePrediction};

pub async fn preset_voice(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let params = QueryParams::parse(query.as_deref());
    let defaults = PresetVoicePrediction::default();

    let payload = PresetVoicePrediction {
        voice_type: params.string("voice_type").unwrap_or(defaults.voice_type),
        text: params.string("text").unwrap_or(defaults.text),
        model_preset: params.string("model_preset").unwrap_or(defaults.model_preset),
        fn_index: params.int("fn_index")?.unwrap_or(defaults.fn_index),
    };

    let body = state.gradio.predict(&payload).await?;
    Ok(relay(body))
}

pub async fn custom_voices(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let params = QueryParams::parse(query.as_deref());

    let mut payload = CustomVoicesPrediction::new(params.required_list("path_to_audios")?);
    if let Some(split) = params.bool("split_in_chunks")? {
        payload.split_in_chunks = split;
    }
    if let Some(text) = params.string("text") {
        payload.text = text;
    }
    if let Some(fn_index) = params.int("fn_index")? {
        payload.fn_index = fn_index;
    }

    let body = state.gradio.predict(&payload).await?;
    Ok(relay(body))
}

pub async fn predict_from_one_file(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let params = QueryParams::parse(query.as_deref());

    let mut payload = OneFilePrediction::new(params.required_string("path_to_audio")?);
    if let Some(split) = params.bool("split_in_chunks")? {
        payload.split_in_chunks = split;
    }
    if let Some(text) = params.string("text") {
        payload.text = text;
    }
    if let Some(fn_index) = params.int("fn_index")? {
        payload.fn_index = fn_index;
    }

    let body = state.gradio.predict(&payload).await?;
    Ok(relay(body))
}

/// Hand the remote body back unchanged.
fn relay(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
