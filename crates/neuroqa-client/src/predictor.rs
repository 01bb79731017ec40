//! Prediction trait.
//!
//! Defines the interface the UI uses to ask a question about a story.

use async_trait::async_trait;
use neuroqa_core::{Outcome, Prediction};

use crate::error::{ClientError, ClientResult};
use crate::types::HealthStatus;

/// Something that can answer a yes/no question about a story.
///
/// Implementors must call [`validate_input`] before doing any I/O so that a
/// blank story or question never reaches the network.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Where requests are sent, for display.
    fn endpoint(&self) -> &str;

    /// Ask the question. Exactly one attempt; no retries.
    async fn predict(&self, story: &str, question: &str) -> ClientResult<Prediction>;

    /// Probe the service root.
    async fn health(&self) -> HealthStatus;

    /// Ask the question and fold the result into an [`Outcome`].
    ///
    /// Never returns [`Outcome::Idle`] or [`Outcome::Pending`].
    async fn submit(&self, story: &str, question: &str) -> Outcome {
        match self.predict(story, question).await {
            Ok(prediction) => Outcome::Succeeded(prediction),
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

/// Reject a story or question that is empty after trimming.
///
/// # Errors
///
/// Returns [`ClientError::MissingInput`] when either field is blank.
pub fn validate_input(story: &str, question: &str) -> ClientResult<()> {
    if story.trim().is_empty() || question.trim().is_empty() {
        return Err(ClientError::MissingInput);
    }
    Ok(())
}
