//! Display attributes derived from an [`Outcome`].
//!
//! Pure functions only; the terminal front end maps [`Tone`] to colours.

use crate::outcome::Outcome;

/// Semantic colour of the answer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing to report yet.
    Neutral,
    /// A request is in flight.
    Active,
    /// The submission failed.
    Alert,
    /// The answer is "Yes".
    Positive,
    /// Any other answer.
    Negative,
}

/// What the answer panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDisplay {
    /// Large answer line.
    pub answer_text: String,
    /// Confidence line, empty unless the service answered.
    pub confidence_text: String,
    /// Colour of the answer text and panel border.
    pub tone: Tone,
}

impl AnswerDisplay {
    /// Derive the answer panel from an outcome.
    #[must_use]
    pub fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Idle => Self::plain("Awaiting Answer...", Tone::Neutral),
            Outcome::Pending => Self::plain("Thinking...", Tone::Active),
            Outcome::Failed(_) => Self::plain("Error!", Tone::Alert),
            Outcome::Succeeded(prediction) => Self {
                answer_text: prediction.answer.clone(),
                confidence_text: format!(
                    "Confidence: {}%",
                    format_confidence(prediction.selected_confidence())
                ),
                tone: if prediction.is_yes() {
                    Tone::Positive
                } else {
                    Tone::Negative
                },
            },
        }
    }

    fn plain(answer_text: &str, tone: Tone) -> Self {
        Self {
            answer_text: answer_text.to_string(),
            confidence_text: String::new(),
            tone,
        }
    }
}

/// Render a `[0, 1]` fraction as a percentage with two decimals.
#[must_use]
pub fn format_confidence(fraction: f64) -> String {
    // Safety: float multiplication cannot overflow into UB
    #[allow(clippy::arithmetic_side_effects)]
    let percent = fraction * 100.0;
    format!("{percent:.2}")
}

/// Caption of the submit control.
#[must_use]
pub fn submit_label(outcome: &Outcome) -> &'static str {
    if outcome.is_pending() {
        "Processing..."
    } else {
        "Get Answer"
    }
}
