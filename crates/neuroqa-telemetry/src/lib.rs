//! NeuroQA Telemetry - logging for the NeuroQA client.
//!
//! This crate provides:
//! - Configurable logging setup with multiple formats
//! - File output for when the terminal is owned by the UI
//! - Integration with the tracing ecosystem
//!
//! # Example
//!
//! ```rust,no_run
//! use neuroqa_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), neuroqa_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_file_logging("/tmp/neuroqa-logs", "neuroqa")
//!     .with_directive("neuroqa_client=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("Logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_logging};
