//! Config file read/write with atomic backup rotation.

use crate::schema::GateConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Number of rolling backups to keep.
const MAX_BACKUPS: usize = 3;

/// Resolve the config directory.
/// Priority: `CMDGATE_CONFIG_DIR` env > `~/.cmdgate/` > `./.cmdgate`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CMDGATE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".cmdgate"),
        None => PathBuf::from(".cmdgate"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Read the config file as an untyped JSON value tree.
///
/// Returns an empty object if the file doesn't exist (first run) or is blank.
/// Typed deserialization happens later, after `${VAR}` substitution.
pub async fn load_raw_config(path: &Path) -> Result<Value> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(Value::Object(Default::default()));
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;
    let value = match serde_json::to_value(yaml)
        .with_context(|| format!("Config at {} is not representable as JSON", path.display()))?
    {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };

    info!(path = %path.display(), "Loaded config");
    Ok(value)
}

/// Load and parse the config from disk without env substitution.
pub async fn load_config(path: &Path) -> Result<GateConfig> {
    let value = load_raw_config(path).await?;
    serde_json::from_value(value)
        .with_context(|| format!("Invalid config at: {}", path.display()))
}

/// Write config to disk atomically (write to temp file, rename).
///
/// Creates a rolling backup of the previous config before overwriting.
pub async fn write_config(config: &GateConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    if path.exists() {
        rotate_backups(path).await;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    let tmp_path = path.with_extension("yaml.tmp");
    fs::write(&tmp_path, yaml.as_bytes())
        .await
        .with_context(|| format!("Failed to write temp config: {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path).await.with_context(|| {
        format!("Failed to rename temp config to: {}", path.display())
    })?;

    info!(path = %path.display(), "Wrote config");
    Ok(())
}

/// Rotate backup files: config.yaml.bak.1 → .bak.2 → ... → .bak.N
async fn rotate_backups(path: &Path) {
    for i in (1..MAX_BACKUPS).rev() {
        let old = path.with_extension(format!("yaml.bak.{}", i));
        let new = path.with_extension(format!("yaml.bak.{}", i + 1));
        if old.exists() {
            if let Err(e) = fs::rename(&old, &new).await {
                warn!("Failed to rotate backup {}: {}", old.display(), e);
            }
        }
    }

    let bak = path.with_extension("yaml.bak.1");
    if let Err(e) = fs::copy(path, &bak).await {
        warn!("Failed to create backup {}: {}", bak.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::IntentTriggers;
    use cmdgate_core::CommandType;

    fn sample() -> GateConfig {
        GateConfig {
            triggers: vec![IntentTriggers {
                intent: CommandType::Gallery,
                commands: vec!["/album".into()],
                phrases: vec![],
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.yaml")).await.unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[tokio::test]
    async fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        write_config(&sample(), &path).await.unwrap();
        assert_eq!(load_config(&path).await.unwrap(), sample());
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[tokio::test]
    async fn overwriting_keeps_rolling_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        for _ in 0..5 {
            write_config(&sample(), &path).await.unwrap();
        }
        assert!(path.with_extension("yaml.bak.1").exists());
        assert!(path.with_extension("yaml.bak.3").exists());
        assert!(!path.with_extension("yaml.bak.4").exists());
    }

    #[tokio::test]
    async fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        tokio::fs::write(&path, "triggers: [{intent: 42").await.unwrap();
        let err = load_config(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config YAML"));
    }
}
