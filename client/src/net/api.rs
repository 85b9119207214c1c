//! REST call to the digit prediction endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning a connectivity error since the endpoint
//! is only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not consulted: the body alone decides between a
//! prediction and a service error, so error payloads sent with 4xx/5xx are
//! still shown verbatim. Anything that prevents reading a JSON body is a
//! connectivity failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{PredictError, Prediction};
#[cfg(feature = "hydrate")]
use super::types::{PredictRequest, parse_predict_body};

/// Same-origin prediction endpoint, relayed upstream by the host.
pub const PREDICT_ENDPOINT: &str = "/api/predict/";

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(stage: &str, detail: &str) -> String {
    format!("{stage} failed: {detail}")
}

/// Submit a PNG data URI to [`PREDICT_ENDPOINT`] and interpret the reply.
///
/// Runs exactly once: no retry, no timeout, no cancellation.
///
/// # Errors
///
/// [`PredictError::Service`] when the endpoint returns an error payload,
/// [`PredictError::Connectivity`] for transport or decoding failures.
pub async fn predict_digit(image: String) -> Result<Prediction, PredictError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = PredictRequest { image };
        let resp = gloo_net::http::Request::post(PREDICT_ENDPOINT)
            .json(&payload)
            .map_err(|e| PredictError::Connectivity(transport_failed_message("encode", &e.to_string())))?
            .send()
            .await
            .map_err(|e| PredictError::Connectivity(transport_failed_message("send", &e.to_string())))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| PredictError::Connectivity(transport_failed_message("read", &e.to_string())))?;
        log::debug!("predict response status={status} bytes={}", text.len());
        parse_predict_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
        Err(PredictError::Connectivity("not available on server".to_owned()))
    }
}
