//! `cmdgate-config` — configuration for the command gate.
//!
//! Provides:
//! - Typed config schema (logging, extra triggers)
//! - YAML read/write with atomic backup rotation
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation with field paths
//! - Registry construction from a loaded config

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{collect_referenced_vars, resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, load_raw_config, write_config};
pub use schema::{GateConfig, IntentTriggers, LoggingConfig};
pub use validation::{log_report, validate, ConfigValidationError, ValidationReport};

use anyhow::{Context, Result};
use cmdgate_commands::CommandRegistry;
use cmdgate_core::GateError;
use std::collections::HashMap;
use std::path::Path;

/// A loaded config together with its validation findings.
///
/// Findings are not logged here: the caller installs its logger from the
/// config first, then hands the report to [`log_report`].
#[derive(Debug)]
pub struct PreparedConfig {
    pub config: GateConfig,
    pub report: ValidationReport,
}

/// Load, apply env substitution, apply defaults and validate a config file.
pub async fn load_and_prepare(path: &Path) -> Result<PreparedConfig> {
    load_and_prepare_with_env(path, &std::env::vars().collect()).await
}

/// Same as [`load_and_prepare`] with an explicit environment (useful for testing).
pub async fn load_and_prepare_with_env(
    path: &Path,
    env: &HashMap<String, String>,
) -> Result<PreparedConfig> {
    let raw = load_raw_config(path).await?;
    let value = resolve_env_vars_with(&raw, env).context("Failed to resolve env vars in config")?;
    let config: GateConfig = serde_json::from_value(value)
        .with_context(|| format!("Invalid config at: {}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config = apply_all_defaults(config, base_dir);
    let report = validate(&config);

    Ok(PreparedConfig { config, report })
}

/// Build the immutable trigger registry described by `config`.
pub fn build_registry(config: &GateConfig) -> Result<CommandRegistry, GateError> {
    let mut builder = CommandRegistry::builder();
    if !config.disable_builtin {
        builder = builder.with_builtin();
    }
    for entry in &config.triggers {
        for command in &entry.commands {
            builder = builder.command(entry.intent, command.clone());
        }
        for phrase in &entry.phrases {
            builder = builder.phrase(entry.intent, phrase.clone());
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdgate_core::CommandType;

    #[tokio::test]
    async fn prepares_missing_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prepared = load_and_prepare(&config_file_path(dir.path())).await.unwrap();
        assert!(prepared.report.is_valid());
        let logging = prepared.config.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.dir, Some(dir.path().join("logs")));
    }

    #[tokio::test]
    async fn prepares_yaml_with_extra_triggers() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        tokio::fs::write(&path, "triggers:\n  - intent: GALLERY\n    phrases: [\"vedi stili\"]\n")
            .await
            .unwrap();
        let config = load_and_prepare(&path).await.unwrap().config;
        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.match_phrase("vedi stili"), Some(CommandType::Gallery));
        assert_eq!(registry.match_command("/gallery"), Some(CommandType::Gallery));
    }

    #[tokio::test]
    async fn env_references_fill_non_string_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        let yaml = "disableBuiltin: ${GATE_FLAG}\ntriggers:\n  - intent: ${GATE_INTENT}\n    commands: [\"/album\"]\n";
        tokio::fs::write(&path, yaml).await.unwrap();
        let env: HashMap<String, String> = [("GATE_FLAG", "true"), ("GATE_INTENT", "GALLERY")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let prepared = load_and_prepare_with_env(&path, &env).await.unwrap();
        assert!(prepared.config.disable_builtin);
        assert_eq!(prepared.config.triggers[0].intent, CommandType::Gallery);
        let registry = build_registry(&prepared.config).unwrap();
        assert_eq!(registry.match_command("/album"), Some(CommandType::Gallery));
        assert_eq!(registry.match_command("/gallery"), None);
    }

    #[tokio::test]
    async fn findings_are_returned_for_the_caller_to_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        tokio::fs::write(&path, "disableBuiltin: true\n").await.unwrap();

        let prepared = load_and_prepare_with_env(&path, &HashMap::new()).await.unwrap();
        assert!(prepared.report.is_valid());
        assert_eq!(prepared.report.warnings.len(), 1);
        assert_eq!(prepared.report.warnings[0].path, "disableBuiltin");
    }

    #[test]
    fn disable_builtin_leaves_only_configured_triggers() {
        let config = GateConfig {
            disable_builtin: true,
            triggers: vec![IntentTriggers {
                intent: CommandType::Gallery,
                commands: vec!["/album".into()],
                phrases: vec![],
            }],
            ..Default::default()
        };
        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.match_command("/gallery"), None);
    }

    #[test]
    fn invalid_trigger_fails_registry_build() {
        let config = GateConfig {
            triggers: vec![IntentTriggers {
                intent: CommandType::Gallery,
                commands: vec!["gallery".into()],
                phrases: vec![],
            }],
            ..Default::default()
        };
        assert!(matches!(build_registry(&config), Err(GateError::InvalidCommand { .. })));
    }
}
