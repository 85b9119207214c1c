//! Wire types for the prediction endpoint.
//!
//! DESIGN
//! ======
//! The endpoint answers with either `{"error": ...}` or
//! `{"prediction": n, "confidence": c}`. Fields are read loosely as JSON values
//! and validated here, so a structurally odd body becomes a typed
//! `PredictError` instead of a serde failure deep in the fetch path.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /api/predict/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// PNG data URI of the drawing.
    pub image: String,
}

/// Raw response body. Every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub prediction: Option<Value>,
    #[serde(default)]
    pub confidence: Option<Value>,
}

/// Failures surfaced to the user after a prediction attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The endpoint answered with an explicit error payload.
    #[error("prediction service error: {0}")]
    Service(String),
    /// The request did not complete or the reply could not be understood.
    #[error("prediction service unreachable: {0}")]
    Connectivity(String),
}

impl PredictError {
    /// Text for the blocking notification shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(message) => format!("Prediction failed: {message}"),
            Self::Connectivity(_) => "Could not reach the prediction service".to_owned(),
        }
    }
}

/// Model confidence, held as hundredths of a percent (`9567` = 95.67%).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Confidence(u32);

impl Confidence {
    /// Convert a fraction in `[0, 1]`, rounding to two decimal places of percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_fraction(fraction: f64) -> Option<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return None;
        }
        Some(Self((fraction * 10_000.0).round() as u32))
    }

    #[must_use]
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    #[must_use]
    pub fn hundredths(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A successful classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prediction {
    /// Predicted digit, 0 through 9.
    pub label: u8,
    pub confidence: Confidence,
}

impl PredictResponse {
    /// Interpret the body. An `error` field wins over everything else.
    ///
    /// # Errors
    ///
    /// [`PredictError::Service`] for an error payload, and
    /// [`PredictError::Connectivity`] when the success fields are missing or
    /// out of range.
    pub fn into_prediction(self) -> Result<Prediction, PredictError> {
        if let Some(error) = self.error.filter(|v| !v.is_null()) {
            let message = match error {
                Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(PredictError::Service(message));
        }

        let label = self
            .prediction
            .as_ref()
            .and_then(parse_label)
            .ok_or_else(|| malformed("prediction"))?;
        let confidence = self
            .confidence
            .as_ref()
            .and_then(Value::as_f64)
            .and_then(Confidence::from_fraction)
            .ok_or_else(|| malformed("confidence"))?;

        Ok(Prediction { label, confidence })
    }
}

/// Parse a response body as returned by the endpoint.
///
/// # Errors
///
/// Invalid JSON is a [`PredictError::Connectivity`]; otherwise see
/// [`PredictResponse::into_prediction`].
pub fn parse_predict_body(text: &str) -> Result<Prediction, PredictError> {
    let body: PredictResponse =
        serde_json::from_str(text).map_err(|e| PredictError::Connectivity(format!("malformed response: {e}")))?;
    body.into_prediction()
}

fn parse_label(value: &Value) -> Option<u8> {
    let n = value.as_u64()?;
    u8::try_from(n).ok().filter(|d| *d <= 9)
}

fn malformed(field: &str) -> PredictError {
    PredictError::Connectivity(format!("malformed response: missing or invalid `{field}`"))
}
