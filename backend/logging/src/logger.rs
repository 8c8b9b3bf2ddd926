//! Structured Logger
//!
//! Wraps `tracing` to provide console output (plain or JSON), an optional
//! daily-rotated NDJSON file, and environment-based level control.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize the global structured logger.
///
/// Console output goes to stderr so stdout stays free for command output.
/// When `log_dir` is set, NDJSON is also written to `cmdgate.log.YYYY-MM-DD`.
/// `RUST_LOG` wins over `level`. Calling this twice is a no-op.
pub fn init_logger(
    log_dir: Option<&Path>,
    level: &str,
    format: LogFormat,
) -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("cmdgate.log")
                .build(dir)?;
            Some(fmt::layer().json().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    let json_console = (format == LogFormat::Json)
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_console = (format == LogFormat::Text).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(text_console)
        .with(file_layer)
        .try_init();

    Ok(())
}
