//! NeuroQA Client - talks to the story-answering prediction service.
//!
//! The service is an external collaborator. This crate sends one JSON
//! `POST` per submission and folds every failure into a user-facing
//! message:
//!
//! - [`Predictor`] - the seam the UI depends on
//! - [`PredictionClient`] - the `reqwest` implementation
//! - [`ClientError`] - validation, server and transport failures
//!
//! # Example
//!
//! ```rust,no_run
//! use neuroqa_client::{PredictionClient, Predictor};
//!
//! # async fn run() -> Result<(), neuroqa_client::ClientError> {
//! let client = PredictionClient::new("http://127.0.0.1:8000/predict")?;
//! let outcome = client
//!     .submit("Mary went to the garden .", "Is Mary in the garden ?")
//!     .await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod error;
pub mod http;
pub mod predictor;
pub mod types;

pub use error::{ClientError, ClientResult, GENERIC_SERVER_ERROR};
pub use http::{DEFAULT_ENDPOINT, PredictionClient};
pub use predictor::{Predictor, validate_input};
pub use types::{HealthStatus, PredictRequest};
