//! Bridge from `neuroqa_config::Config` to runtime types.

use std::path::Path;

use neuroqa_config::Config;
use neuroqa_telemetry::{LogConfig, LogFormat};

/// Convert config to [`LogConfig`].
///
/// The interactive screen owns the terminal, so logs go to daily files in
/// `log_dir`. Snapshot mode (`log_dir == None`) logs to stderr.
pub(crate) fn to_log_config(cfg: &Config, log_dir: Option<&Path>, verbose: bool) -> LogConfig {
    let mut log_config =
        LogConfig::new(&cfg.logging.level).with_format(LogFormat::from_name(&cfg.logging.format));

    for directive in &cfg.logging.directives {
        log_config = log_config.with_directive(directive);
    }

    if verbose {
        "debug".clone_into(&mut log_config.level);
    }

    if let Some(dir) = log_dir {
        log_config = log_config.with_file_logging(dir, "neuroqa");
    }

    log_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroqa_telemetry::LogTarget;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_log_to_stderr() {
        let lc = to_log_config(&Config::default(), None, false);
        assert_eq!(lc.level, "info");
        assert_eq!(lc.format, LogFormat::Compact);
        assert_eq!(lc.target, LogTarget::Stderr);
        assert!(lc.ansi);
    }

    #[test]
    fn test_file_target_and_verbose() {
        let mut cfg = Config::default();
        cfg.logging.format = "json".to_string();
        cfg.logging.directives = vec!["neuroqa_client=trace".to_string()];

        let dir = PathBuf::from("/tmp/neuroqa-logs");
        let lc = to_log_config(&cfg, Some(&dir), true);
        assert_eq!(lc.level, "debug");
        assert_eq!(lc.format, LogFormat::Json);
        assert_eq!(lc.target, LogTarget::File(dir));
        assert_eq!(lc.file_prefix, "neuroqa");
        assert_eq!(lc.directives, vec!["neuroqa_client=trace".to_string()]);
        assert!(!lc.ansi);
    }
}
