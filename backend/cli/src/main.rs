mod chat_cmd;
mod config;
mod config_cmd;
mod detect_cmd;
mod terminal_output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cmdgate_commands::{build_default_dispatcher, CommandDetector};
use cmdgate_config::{build_registry, load_and_prepare, log_report, GateConfig, PreparedConfig};
use cmdgate_logging::{init_logger, LogFormat};

use config::Settings;

#[derive(Parser)]
#[command(name = "cmdgate")]
#[command(about = "cmdgate — deterministic command detection for chat orchestration")]
#[command(version)]
struct Cli {
    /// Path to config.yaml (defaults to ~/.cmdgate/config.yaml)
    #[arg(long, global = true, env = "CMDGATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single message and print the detection result
    Detect {
        /// The raw chat message (quote it to keep spacing)
        message: String,
    },
    /// List every registered trigger
    Triggers {
        #[arg(long)]
        json: bool,
    },
    /// Route stdin messages through the gate, one per line
    Chat {
        /// Print each route as a JSON line instead of dispatching
        #[arg(long)]
        json: bool,
    },
    /// Write a starter config file
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Load the config and report validation problems
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env(cli.config);

    match cli.command {
        Commands::Init { force } => config_cmd::run_init(&settings.config_path, force).await?,
        Commands::Validate => {
            let prepared = load_and_prepare(&settings.config_path).await?;
            init_logging(&prepared.config)?;
            config_cmd::run_validate(&settings.config_path, &prepared)?;
        }
        Commands::Detect { message } => {
            let detector = build_detector(&settings, &prepare(&settings).await?)?;
            detect_cmd::run_detect(&detector, &message)?;
        }
        Commands::Triggers { json } => {
            let detector = build_detector(&settings, &prepare(&settings).await?)?;
            detect_cmd::run_triggers(&detector, json)?;
        }
        Commands::Chat { json } => {
            let detector = build_detector(&settings, &prepare(&settings).await?)?;
            let dispatcher = build_default_dispatcher();
            chat_cmd::run(&detector, &dispatcher, &settings.action_context(), json).await?;
        }
    }

    Ok(())
}

/// Load the config file, install the global logger from it, then log its findings.
async fn prepare(settings: &Settings) -> Result<GateConfig> {
    let PreparedConfig { config, report } = load_and_prepare(&settings.config_path).await?;
    init_logging(&config)?;
    log_report(&report);
    info!(path = %settings.config_path.display(), "Configuration ready");
    Ok(config)
}

/// Build the registry once and wrap it in a shareable detector.
fn build_detector(settings: &Settings, config: &GateConfig) -> Result<CommandDetector> {
    let registry = build_registry(config)
        .with_context(|| format!("Invalid triggers in {}", settings.config_path.display()))?;
    info!(triggers = registry.len(), "Command registry built");
    Ok(CommandDetector::new(Arc::new(registry)))
}

fn init_logging(config: &GateConfig) -> Result<()> {
    let logging = config.logging.clone().unwrap_or_default();
    let level = logging.level.as_deref().unwrap_or("info");
    let format = logging.format.unwrap_or(LogFormat::Text);
    let dir = logging.dir.filter(|_| logging.file.unwrap_or(true));

    if let Some(dir) = &dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    init_logger(dir.as_deref(), level, format).context("Failed to initialize logging")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_path_comes_from_flag_or_environment() {
        let cli = Cli::try_parse_from(["cmdgate", "validate", "--config", "flag.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("flag.yaml")));

        std::env::set_var("CMDGATE_CONFIG", "env.yaml");
        let from_env = Cli::try_parse_from(["cmdgate", "triggers"]).unwrap();
        let flag_wins = Cli::try_parse_from(["cmdgate", "--config", "flag.yaml", "triggers"]).unwrap();
        std::env::remove_var("CMDGATE_CONFIG");

        assert_eq!(from_env.config, Some(PathBuf::from("env.yaml")));
        assert_eq!(flag_wins.config, Some(PathBuf::from("flag.yaml")));
        assert_eq!(
            Settings::from_env(from_env.config).config_path,
            PathBuf::from("env.yaml")
        );
    }
}
