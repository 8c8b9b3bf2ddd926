//! Config defaults: fills in unset values after load.

use std::path::Path;

use cmdgate_logging::LogFormat;

use crate::schema::{GateConfig, LoggingConfig};

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log directory name under the config dir.
pub const DEFAULT_LOG_DIR_NAME: &str = "logs";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: GateConfig, config_dir: &Path) -> GateConfig {
    apply_logging_defaults(config, config_dir)
}

/// Ensure every logging field is populated.
fn apply_logging_defaults(mut config: GateConfig, config_dir: &Path) -> GateConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.as_deref().map_or(true, |l| l.trim().is_empty()) {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.format.is_none() {
        logging.format = Some(LogFormat::Text);
    }
    if logging.dir.is_none() {
        logging.dir = Some(config_dir.join(DEFAULT_LOG_DIR_NAME));
    }
    if logging.file.is_none() {
        logging.file = Some(true);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn fills_empty_logging() {
        let config = apply_all_defaults(GateConfig::default(), Path::new("/etc/cmdgate"));
        let logging = config.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.format, Some(LogFormat::Text));
        assert_eq!(logging.dir, Some(PathBuf::from("/etc/cmdgate/logs")));
        assert_eq!(logging.file, Some(true));
    }

    #[test]
    fn keeps_explicit_values() {
        let config = GateConfig {
            logging: Some(LoggingConfig {
                level: Some("debug".into()),
                format: Some(LogFormat::Json),
                dir: Some("/tmp/x".into()),
                file: Some(false),
            }),
            ..Default::default()
        };
        let logging = apply_all_defaults(config, Path::new("/ignored")).logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.format, Some(LogFormat::Json));
        assert_eq!(logging.dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(logging.file, Some(false));
    }
}
