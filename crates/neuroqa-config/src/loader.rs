//! Config file discovery and layered loading.
//!
//! Implements the `Config::load()` algorithm:
//! 1. Parse `defaults.toml` → base
//! 2. Merge the user file (`~/.neuroqa/config.toml`) or an explicit file
//! 3. Apply `NEUROQA_*` env overrides
//! 4. Deserialize merged tree → `Config`
//! 5. Validate
//! 6. Return `ResolvedConfig`

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::env::{apply_env_overrides, collect_env_vars};
use crate::error::{ConfigError, ConfigResult};
use crate::merge::deep_merge;
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// A validated configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The final configuration.
    pub config: Config,
    /// Files that contributed, in load order.
    pub loaded_files: Vec<String>,
    /// The `~/.neuroqa` directory used for user-level files.
    pub home_dir: PathBuf,
}

impl ResolvedConfig {
    /// Directory for log files: the configured one, or `~/.neuroqa/logs`.
    #[must_use]
    pub fn log_directory(&self) -> PathBuf {
        if self.config.logging.directory.trim().is_empty() {
            self.home_dir.join("logs")
        } else {
            PathBuf::from(&self.config.logging.directory)
        }
    }
}

/// Load the configuration with layered precedence.
///
/// `explicit_file`, when given, replaces the user file and must exist.
/// `neuroqa_home_override` replaces `~/.neuroqa` (used by tests).
///
/// # Errors
///
/// Returns a [`ConfigError`] if any config file is malformed, or if the
/// final merged configuration fails validation.
pub fn load(
    explicit_file: Option<&Path>,
    neuroqa_home_override: Option<&Path>,
) -> ConfigResult<ResolvedConfig> {
    let home_dir = match neuroqa_home_override {
        Some(h) => h.to_path_buf(),
        None => home_directory()?.join(".neuroqa"),
    };
    load_layers(explicit_file, &home_dir, &collect_env_vars())
}

fn load_layers(
    explicit_file: Option<&Path>,
    home_dir: &Path,
    env_vars: &HashMap<String, String>,
) -> ConfigResult<ResolvedConfig> {
    // 1. Parse embedded defaults.
    let mut merged: toml::Value =
        toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
            path: "<embedded defaults>".to_owned(),
            source: e,
        })?;
    let mut loaded_files = Vec::new();

    // 2. Explicit file, or the user file when present.
    let overlay = if let Some(path) = explicit_file {
        Some((read_file(path)?, path.to_path_buf()))
    } else {
        let user_path = home_dir.join("config.toml");
        try_load_file(&user_path)?.map(|v| (v, user_path))
    };

    if let Some((overlay, path)) = overlay {
        deep_merge(&mut merged, &overlay);
        loaded_files.push(path.display().to_string());
        info!(path = %path.display(), "loaded config file");
    }

    // 3. Env overrides.
    apply_env_overrides(&mut merged, env_vars);

    // 4. Deserialize.
    let config: Config =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged config>".to_owned(),
                source: e,
            })?;

    // 5. Validate.
    validate::validate(&config)?;

    Ok(ResolvedConfig {
        config,
        loaded_files,
        home_dir: home_dir.to_path_buf(),
    })
}

/// Read a file that must exist.
fn read_file(path: &Path) -> ConfigResult<toml::Value> {
    try_load_file(path)?.ok_or_else(|| ConfigError::ReadError {
        path: path.display().to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    })
}

/// Try to load a file, returning `None` if the file doesn't exist.
///
/// Uses a single read operation to avoid TOCTOU races (no separate
/// exists/metadata checks before reading).
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, skipping");
            return Ok(None);
        },
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {} bytes, exceeding the {} byte limit",
                content.len(),
                MAX_CONFIG_FILE_SIZE
            ),
        });
    }

    let value: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(value))
}

/// Determine the user's home directory.
fn home_directory() -> ConfigResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDir)
}
