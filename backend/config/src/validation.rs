//! Config validation: checks with field paths and user-friendly messages.

use std::collections::HashMap;

use cmdgate_commands::{validate_command, validate_phrase};
use cmdgate_core::CommandType;
use thiserror::Error;

use crate::schema::GateConfig;

const KNOWN_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError { path: path.into(), message: message.into() });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError { path: path.into(), message: message.into() });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &GateConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_logging(config, &mut report);
    validate_triggers(config, &mut report);
    report
}

/// Emit every finding through `tracing`. Call once the logger is installed.
pub fn log_report(report: &ValidationReport) {
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
}

fn validate_logging(config: &GateConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        let plain = level.trim().to_ascii_lowercase();
        if !plain.contains('=') && !plain.contains(',') && !KNOWN_LEVELS.contains(&plain.as_str()) {
            report.warn("logging.level", format!("Unknown level '{level}'; expected one of {}", KNOWN_LEVELS.join(", ")));
        }
    }
}

/// Every trigger must be well-formed and owned by exactly one intent.
fn validate_triggers(config: &GateConfig, report: &mut ValidationReport) {
    if config.disable_builtin && config.triggers.iter().all(|t| t.commands.is_empty() && t.phrases.is_empty()) {
        report.warn("disableBuiltin", "Built-in triggers disabled and none configured; no message will ever be a command");
    }

    let mut owners: HashMap<&str, (CommandType, String)> = HashMap::new();
    for (i, entry) in config.triggers.iter().enumerate() {
        let path = format!("triggers[{i}]");
        if entry.intent.action().is_none() {
            report.error(format!("{path}.intent"), format!("Intent {} cannot carry triggers", entry.intent));
            continue;
        }
        if entry.commands.is_empty() && entry.phrases.is_empty() {
            report.warn(&path, "No commands or phrases listed");
        }

        let commands = entry.commands.iter().enumerate().map(|(j, c)| (format!("{path}.commands[{j}]"), c, validate_command(c)));
        let phrases = entry.phrases.iter().enumerate().map(|(j, p)| (format!("{path}.phrases[{j}]"), p, validate_phrase(p)));
        for (trigger_path, trigger, check) in commands.chain(phrases) {
            if let Err(e) = check {
                report.error(trigger_path, e.to_string());
                continue;
            }
            match owners.get(trigger.as_str()) {
                Some((owner, first_path)) if *owner != entry.intent => report.error(
                    trigger_path,
                    format!("'{trigger}' is already assigned to {owner} at {first_path}"),
                ),
                Some(_) => {}
                None => {
                    owners.insert(trigger.as_str(), (entry.intent, trigger_path));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{IntentTriggers, LoggingConfig};

    fn gallery(commands: &[&str], phrases: &[&str]) -> IntentTriggers {
        IntentTriggers {
            intent: CommandType::Gallery,
            commands: commands.iter().map(|s| s.to_string()).collect(),
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn default_config_is_valid() {
        let report = validate(&GateConfig::default());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn flags_malformed_triggers_with_paths() {
        let config = GateConfig {
            triggers: vec![gallery(&["album", "/ok"], &["Show  Me"])],
            ..Default::default()
        };
        let report = validate(&config);
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["triggers[0].commands[0]", "triggers[0].phrases[0]"]);
    }

    #[test]
    fn none_intent_is_an_error() {
        let config = GateConfig {
            triggers: vec![IntentTriggers { intent: CommandType::None, commands: vec!["/x".into()], phrases: vec![] }],
            ..Default::default()
        };
        let report = validate(&config);
        assert_eq!(report.errors[0].path, "triggers[0].intent");
    }

    #[test]
    fn repeated_trigger_for_same_intent_is_fine() {
        let config = GateConfig {
            triggers: vec![gallery(&["/album"], &[]), gallery(&["/album"], &[])],
            ..Default::default()
        };
        assert!(validate(&config).is_valid());
    }

    #[test]
    fn warns_on_empty_entry_and_disabled_builtin() {
        let config = GateConfig { disable_builtin: true, triggers: vec![gallery(&[], &[])], ..Default::default() };
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn warns_on_unknown_level_but_accepts_directives() {
        let mut config = GateConfig {
            logging: Some(LoggingConfig { level: Some("loud".into()), ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(validate(&config).warnings.len(), 1);

        config.logging = Some(LoggingConfig { level: Some("cmdgate=debug".into()), ..Default::default() });
        assert!(validate(&config).warnings.is_empty());
    }
}
