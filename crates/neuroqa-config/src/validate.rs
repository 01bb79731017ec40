//! Post-merge configuration validation.

use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Validate a fully-merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_service(config)?;
    validate_logging(config)?;
    validate_ui(config)?;
    Ok(())
}

fn validate_service(config: &Config) -> ConfigResult<()> {
    let endpoint = &config.service.endpoint;
    let invalid = |message: String| ConfigError::ValidationError {
        field: "service.endpoint".to_owned(),
        message,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(format!("'{endpoint}' is not a URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme '{}'; expected http or https",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid(format!("'{endpoint}' has no host")));
    }

    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: format!(
                "unsupported log level '{}'; expected one of: {}",
                config.logging.level,
                valid_levels.join(", ")
            ),
        });
    }

    let valid_formats = ["pretty", "compact", "json", "full"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.format".to_owned(),
            message: format!(
                "unsupported log format '{}'; expected one of: {}",
                config.logging.format,
                valid_formats.join(", ")
            ),
        });
    }

    Ok(())
}

fn validate_ui(config: &Config) -> ConfigResult<()> {
    let valid_themes = ["dark", "light", "high-contrast"];
    if !valid_themes.contains(&config.ui.theme.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "ui.theme".to_owned(),
            message: format!(
                "unsupported theme '{}'; expected one of: {}",
                config.ui.theme,
                valid_themes.join(", ")
            ),
        });
    }
    Ok(())
}
