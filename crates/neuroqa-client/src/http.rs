//! `reqwest` implementation of [`Predictor`].

use async_trait::async_trait;
use neuroqa_core::Prediction;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ClientError, ClientResult, GENERIC_SERVER_ERROR};
use crate::predictor::{Predictor, validate_input};
use crate::types::{ErrorBody, HealthBody, HealthStatus, PredictRequest, PredictResponse};

/// Default endpoint of a locally running service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// HTTP client for the prediction service.
///
/// No timeout is configured; a request lasts as long as the transport allows.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    endpoint: Url,
}

impl PredictionClient {
    /// Create a client for the given `/predict` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] unless the endpoint is an
    /// absolute `http` or `https` URL.
    pub fn new(endpoint: &str) -> ClientResult<Self> {
        let parsed = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client: Client::new(),
            endpoint: parsed,
        })
    }

    /// The service root probed by [`Predictor::health`].
    #[must_use]
    pub fn root_url(&self) -> Url {
        let mut root = self.endpoint.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);
        root
    }

    fn transport_error(&self, err: &impl std::error::Error) -> ClientError {
        ClientError::Transport {
            endpoint: self.endpoint.to_string(),
            reason: error_chain(err),
        }
    }
}

/// Join an error and its sources into one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[async_trait]
impl Predictor for PredictionClient {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn predict(&self, story: &str, question: &str) -> ClientResult<Prediction> {
        validate_input(story, question)?;

        debug!(endpoint = %self.endpoint, "Sending prediction request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(&PredictRequest { story, question })
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message())
                .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
            warn!(status = status.as_u16(), %message, "Prediction service returned an error");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;
        let parsed: PredictResponse =
            serde_json::from_str(&body).map_err(|e| self.transport_error(&e))?;

        let prediction = parsed.into_prediction();
        debug!(answer = %prediction.answer, "Prediction received");
        Ok(prediction)
    }

    async fn health(&self) -> HealthStatus {
        let root = self.root_url();
        let response = match self.client.get(root.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!(url = %root, error = %e, "Health probe failed");
                return HealthStatus::Unreachable(error_chain(&e));
            },
        };

        if !response.status().is_success() {
            return HealthStatus::Unreachable(format!("HTTP {}", response.status().as_u16()));
        }

        match response.json::<HealthBody>().await {
            Ok(body) => HealthStatus::Online(body.status),
            Err(e) => HealthStatus::Unreachable(format!("unexpected health response: {e}")),
        }
    }
}
