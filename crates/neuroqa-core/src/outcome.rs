//! Result of a submission attempt.

use serde::{Deserialize, Serialize};

/// Message shown when the story or question is blank.
pub const VALIDATION_MESSAGE: &str =
    "Please ensure both a Story Context and a Question are entered.";

/// Answer returned by the prediction service.
///
/// `answer` is normally `"Yes"` or `"No"` but is carried verbatim. The
/// confidences are expected in `[0, 1]` and are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The answer text.
    pub answer: String,
    /// Confidence reported for "Yes".
    #[serde(default)]
    pub confidence_yes: f64,
    /// Confidence reported for "No".
    #[serde(default)]
    pub confidence_no: f64,
}

impl Prediction {
    /// Create a prediction.
    #[must_use]
    pub fn new(answer: impl Into<String>, confidence_yes: f64, confidence_no: f64) -> Self {
        Self {
            answer: answer.into(),
            confidence_yes,
            confidence_no,
        }
    }

    /// Whether the answer is literally `"Yes"`.
    #[must_use]
    pub fn is_yes(&self) -> bool {
        self.answer == "Yes"
    }

    /// Confidence of the branch that was answered.
    ///
    /// Any answer other than `"Yes"` reads the "No" confidence.
    #[must_use]
    pub fn selected_confidence(&self) -> f64 {
        if self.is_yes() {
            self.confidence_yes
        } else {
            self.confidence_no
        }
    }
}

/// The current submission outcome. Exactly one is current at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The submission failed; carries the user-facing message.
    Failed(String),
    /// The service answered.
    Succeeded(Prediction),
}

impl Outcome {
    /// Whether a request is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The failure message, if this outcome is a failure.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The prediction, if the service answered.
    #[must_use]
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_confidence_branches_on_yes() {
        let yes = Prediction::new("Yes", 0.8, 0.2);
        assert!((yes.selected_confidence() - 0.8).abs() < f64::EPSILON);

        let no = Prediction::new("No", 0.3, 0.7);
        assert!((no.selected_confidence() - 0.7).abs() < f64::EPSILON);

        // Anything that isn't exactly "Yes" takes the "No" branch.
        let odd = Prediction::new("yes", 0.9, 0.1);
        assert!(!odd.is_yes());
        assert!((odd.selected_confidence() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prediction_missing_confidences_default_to_zero() {
        let p: Prediction = serde_json::from_str(r#"{"answer":"Yes"}"#).unwrap();
        assert_eq!(p.answer, "Yes");
        assert!(p.confidence_yes.abs() < f64::EPSILON);
        assert!(p.confidence_no.abs() < f64::EPSILON);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(Outcome::Pending.is_pending());
        assert!(!Outcome::Idle.is_pending());
        assert_eq!(
            Outcome::Failed("boom".to_string()).error_message(),
            Some("boom")
        );
        assert_eq!(Outcome::Idle.error_message(), None);

        let ok = Outcome::Succeeded(Prediction::new("No", 0.1, 0.9));
        assert_eq!(ok.prediction().map(|p| p.answer.as_str()), Some("No"));
        assert!(ok.error_message().is_none());
    }
}
