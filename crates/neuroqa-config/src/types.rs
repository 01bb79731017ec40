//! Configuration types for the NeuroQA client.
//!
//! Every struct implements [`Default`] with the same values as the embedded
//! `defaults.toml`, so a bare `[section]` header produces a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prediction service location.
    pub service: ServiceSection,
    /// Logging level, format, and destination.
    pub logging: LoggingSection,
    /// Terminal appearance.
    pub ui: UiSection,
}

// ---------------------------------------------------------------------------
// ServiceSection
// ---------------------------------------------------------------------------

/// Where the prediction service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Absolute `http`/`https` URL that accepts `POST {story, question}`.
    pub endpoint: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/predict".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Per-crate tracing directives (e.g. `["neuroqa_client=debug"]`).
    pub directives: Vec<String>,
    /// Log file directory. Empty means `~/.neuroqa/logs`.
    pub directory: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "compact".to_owned(),
            directives: Vec::new(),
            directory: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// UiSection
// ---------------------------------------------------------------------------

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Colour theme: `"dark"`, `"light"`, or `"high-contrast"`.
    pub theme: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: "dark".to_owned(),
        }
    }
}
