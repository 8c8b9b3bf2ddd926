//! Gate configuration schema, typed for serde YAML/JSON deserialization.

use std::path::PathBuf;

use cmdgate_core::CommandType;
use cmdgate_logging::LogFormat;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration file (`config.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateConfig {
    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Drop the built-in trigger vocabulary and use only `triggers`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disable_builtin: bool,

    /// Extra triggers per intent, merged into the registry at startup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<IntentTriggers>,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Filter directive (`info`, `debug`, `cmdgate=trace`, ...). `RUST_LOG` overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<LogFormat>,
    /// Directory for the rolling NDJSON log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Write the rolling log file at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<bool>,
}

// ---------------------------------------------------------------------------
// Triggers
// ---------------------------------------------------------------------------

/// Extra exact-match triggers for one intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentTriggers {
    pub intent: CommandType,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
}
