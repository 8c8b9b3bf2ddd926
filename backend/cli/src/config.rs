use std::path::PathBuf;

use cmdgate_commands::ActionContext;

/// Runtime settings resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to `config.yaml`
    pub config_path: PathBuf,
    /// Session id attached to dispatched actions in `chat`
    pub session_id: String,
    /// Channel name attached to dispatched actions in `chat`
    pub channel: String,
    /// Sender id attached to dispatched actions in `chat`
    pub sender_id: String,
}

impl Settings {
    /// Load settings from environment variables. `config_override` comes from
    /// `--config` or `CMDGATE_CONFIG`.
    pub fn from_env(config_override: Option<PathBuf>) -> Self {
        let config_path = config_override
            .unwrap_or_else(|| cmdgate_config::config_file_path(&cmdgate_config::config_dir()));
        Self {
            config_path,
            session_id: std::env::var("CMDGATE_SESSION").unwrap_or_else(|_| "cli".to_string()),
            channel: std::env::var("CMDGATE_CHANNEL").unwrap_or_else(|_| "stdin".to_string()),
            sender_id: std::env::var("USER").unwrap_or_else(|_| "local".to_string()),
        }
    }

    pub fn action_context(&self) -> ActionContext {
        ActionContext {
            session_id: self.session_id.clone(),
            channel: self.channel.clone(),
            sender_id: self.sender_id.clone(),
        }
    }
}
