//! NeuroQA Core - the form model behind the story-answering client.
//!
//! This crate provides:
//! - The fixed set of demo stories ([`demo`])
//! - The form state with its demo/free-text rules ([`FormState`])
//! - The outcome of a submission ([`Outcome`], [`Prediction`])
//! - Display attributes derived from an outcome ([`AnswerDisplay`])
//!
//! Nothing here performs I/O. The HTTP side lives in `neuroqa-client` and the
//! terminal side in `neuroqa-cli`.
//!
//! # Example
//!
//! ```rust
//! use neuroqa_core::{FormState, Outcome, Prediction, AnswerDisplay};
//!
//! let mut form = FormState::new();
//! form.select_demo(Some(1));
//! form.choose_preset_question("Is Mary in the bedroom ?");
//!
//! let outcome = Outcome::Succeeded(Prediction::new("Yes", 0.87, 0.13));
//! let display = AnswerDisplay::for_outcome(&outcome);
//! assert_eq!(display.confidence_text, "Confidence: 87.00%");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod demo;
pub mod display;
pub mod form;
pub mod outcome;

pub use demo::{DemoStory, parse_demo_id};
pub use display::{AnswerDisplay, Tone, submit_label};
pub use form::FormState;
pub use outcome::{Outcome, Prediction, VALIDATION_MESSAGE};
