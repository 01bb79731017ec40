//! Client error types.
//!
//! `Display` of every variant is the exact message shown to the user.

use neuroqa_core::VALIDATION_MESSAGE;
use thiserror::Error;

/// Fallback shown when a failed response carries no usable `detail`.
pub const GENERIC_SERVER_ERROR: &str = "API request failed.";

/// Errors that can occur while asking the prediction service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Story or question was blank; no request was sent.
    #[error("{}", VALIDATION_MESSAGE)]
    MissingInput,

    /// The service answered with a non-success status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// `detail` from the error body, or [`GENERIC_SERVER_ERROR`].
        message: String,
    },

    /// No usable response could be obtained.
    #[error("Prediction failed. Is the prediction service reachable at {endpoint}? Error: {reason}")]
    Transport {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Underlying error text.
        reason: String,
    },

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
