//! Same-origin relay for `POST /api/predict/`.
//!
//! The browser posts `{"image": "<data URI>"}` here. The body is forwarded
//! verbatim to the configured upstream, and the upstream status and JSON body
//! come back unchanged, so error payloads still reach the page as service
//! errors. When no JSON reply arrives the relay answers 502 with plain text,
//! which the page reports as a connectivity failure.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("missing image")]
    MissingImage,
    #[error("prediction upstream unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("prediction upstream returned a non-JSON body (status {0})")]
    NonJson(StatusCode),
}

pub(crate) fn relay_error_to_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::MissingImage => StatusCode::BAD_REQUEST,
        RelayError::Upstream(_) | RelayError::NonJson(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = relay_error_to_status(&self);
        match self {
            Self::MissingImage => (status, Json(serde_json::json!({ "error": "missing image" }))).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

/// Parse the request body and require a non-empty string `image` field.
pub(crate) fn validate_body(body: &[u8]) -> Result<Value, RelayError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| RelayError::MissingImage)?;
    match value.get("image") {
        Some(Value::String(image)) if !image.is_empty() => Ok(value),
        _ => Err(RelayError::MissingImage),
    }
}

/// Post `body` to `url` and return the upstream status with its JSON reply.
pub(crate) async fn forward(http: &reqwest::Client, url: &str, body: &Value) -> Result<(StatusCode, Value), RelayError> {
    let response = http.post(url).json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;
    let reply = serde_json::from_str(&text).map_err(|_| RelayError::NonJson(status))?;
    Ok((status, reply))
}

/// `POST /api/predict/`: relay a drawing to the prediction backend.
pub async fn relay(State(state): State<AppState>, body: Bytes) -> Result<Response, RelayError> {
    let payload = validate_body(&body).inspect_err(|_| {
        tracing::warn!(bytes = body.len(), "prediction request without image");
    })?;

    let started = Instant::now();
    let result = forward(&state.http, &state.upstream_url, &payload).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    match &result {
        Ok((status, _)) => tracing::info!(status = status.as_u16(), elapsed_ms, "prediction relayed"),
        Err(e) => tracing::warn!(error = %e, elapsed_ms, "prediction relay failed"),
    }

    let (status, reply) = result?;
    Ok((status, Json(reply)).into_response())
}
