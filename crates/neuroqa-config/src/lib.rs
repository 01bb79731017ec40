#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Configuration for the NeuroQA client.
//!
//! # Usage
//!
//! ```rust,no_run
//! use neuroqa_config::Config;
//!
//! let resolved = Config::load().unwrap();
//! println!("Endpoint: {}", resolved.config.service.endpoint);
//! ```
//!
//! # Configuration Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Environment variables** (`NEUROQA_ENDPOINT`, `NEUROQA_LOG_LEVEL`)
//! 2. **User** (`~/.neuroqa/config.toml`, or an explicit file)
//! 3. **Embedded defaults** (`defaults.toml` compiled into binary)
//!
//! Command-line flags are applied on top by the binary.

/// Environment variable overrides.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file discovery and loading.
pub mod loader;
/// Recursive merging of TOML layers.
pub mod merge;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::ResolvedConfig;
pub use types::*;

impl Config {
    /// Load configuration from defaults, the user file and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the user file is malformed or the final
    /// configuration fails validation.
    pub fn load() -> ConfigResult<ResolvedConfig> {
        loader::load(None, None)
    }

    /// Load configuration with an explicit file in place of the user file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or the
    /// final configuration fails validation.
    pub fn load_with_file(path: &std::path::Path) -> ConfigResult<ResolvedConfig> {
        loader::load(Some(path), None)
    }
}
