//! Wire types for the prediction service.

use neuroqa_core::Prediction;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest<'a> {
    /// Narrative context, sent verbatim.
    pub story: &'a str,
    /// Yes/no question, sent verbatim.
    pub question: &'a str,
}

/// Success body. Confidences may be missing or `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct PredictResponse {
    pub(crate) answer: String,
    #[serde(default)]
    pub(crate) confidence_yes: Option<f64>,
    #[serde(default)]
    pub(crate) confidence_no: Option<f64>,
}

impl PredictResponse {
    pub(crate) fn into_prediction(self) -> Prediction {
        Prediction::new(
            self.answer,
            self.confidence_yes.unwrap_or_default(),
            self.confidence_no.unwrap_or_default(),
        )
    }
}

/// Error body of a non-success response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable detail, if the body carries a non-empty one.
    ///
    /// Structured details (validation error lists) are rendered as compact
    /// JSON.
    pub(crate) fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Body of `GET /` on the service root.
#[derive(Debug, Deserialize)]
pub(crate) struct HealthBody {
    pub(crate) status: String,
}

/// Reachability of the service root, as shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Not probed yet.
    Unknown,
    /// The service answered; carries its status line.
    Online(String),
    /// The probe failed; carries the reason.
    Unreachable(String),
}

impl HealthStatus {
    /// Whether the service answered the probe.
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }
}
