//! Environment variable overrides.
//!
//! Env vars sit above config files: a set, non-empty variable replaces
//! whatever the files said.

use std::collections::HashMap;

use tracing::debug;

/// Mapping from environment variable name to config field path.
struct EnvMapping {
    var_name: &'static str,
    section: &'static str,
    field: &'static str,
}

/// All supported `NEUROQA_*` mappings.
const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: "NEUROQA_ENDPOINT",
        section: "service",
        field: "endpoint",
    },
    EnvMapping {
        var_name: "NEUROQA_LOG_LEVEL",
        section: "logging",
        field: "level",
    },
];

/// Snapshot the `NEUROQA_*` variables from the process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    ENV_MAPPINGS
        .iter()
        .filter_map(|m| {
            std::env::var(m.var_name)
                .ok()
                .map(|v| (m.var_name.to_owned(), v))
        })
        .collect()
}

/// Write every set, non-empty mapped variable into the merged tree.
pub fn apply_env_overrides(merged: &mut toml::Value, env_vars: &HashMap<String, String>) {
    let Some(root) = merged.as_table_mut() else {
        return;
    };

    for mapping in ENV_MAPPINGS {
        let Some(value) = env_vars.get(mapping.var_name) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }

        let section = root
            .entry(mapping.section)
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
        if let Some(table) = section.as_table_mut() {
            table.insert(mapping.field.to_owned(), toml::Value::String(value.clone()));
            debug!(
                var = mapping.var_name,
                section = mapping.section,
                field = mapping.field,
                "applied env override"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_file_value() {
        let mut merged: toml::Value = toml::from_str(
            r#"
            [service]
            endpoint = "http://from-file:8000/predict"
            "#,
        )
        .unwrap();
        let env = HashMap::from([(
            "NEUROQA_ENDPOINT".to_owned(),
            "http://from-env:9000/predict".to_owned(),
        )]);

        apply_env_overrides(&mut merged, &env);
        assert_eq!(
            merged["service"]["endpoint"].as_str(),
            Some("http://from-env:9000/predict")
        );
    }

    #[test]
    fn test_override_creates_missing_section() {
        let mut merged: toml::Value = toml::from_str("").unwrap();
        let env = HashMap::from([("NEUROQA_LOG_LEVEL".to_owned(), "debug".to_owned())]);

        apply_env_overrides(&mut merged, &env);
        assert_eq!(merged["logging"]["level"].as_str(), Some("debug"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let mut merged: toml::Value = toml::from_str(
            r#"
            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        let env = HashMap::from([("NEUROQA_LOG_LEVEL".to_owned(), "  ".to_owned())]);

        apply_env_overrides(&mut merged, &env);
        assert_eq!(merged["logging"]["level"].as_str(), Some("warn"));
    }
}
