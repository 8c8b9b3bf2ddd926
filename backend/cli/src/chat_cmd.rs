//! CLI Chat Command
//!
//! Reads messages line by line from stdin and routes each through the gate,
//! the way the orchestrator does for inbound chat.

use anyhow::{Context, Result};
use cmdgate_commands::{ActionContext, ActionDispatcher, CommandDetector, MessageRoute};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::terminal_output::{paint, DIM, GREEN};

pub async fn run(
    detector: &CommandDetector,
    dispatcher: &ActionDispatcher,
    ctx: &ActionContext,
    as_json: bool,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut count = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        count += 1;
        let route = detector.route(&line);

        if as_json {
            println!("{}", serde_json::to_string(&route)?);
            continue;
        }

        match route {
            MessageRoute::Command { action, detection } => {
                let resp = dispatcher.dispatch(ctx, action, &detection).await?;
                println!("{} {}", paint(&format!("[{action}]"), GREEN), resp.text);
            }
            MessageRoute::Conversation { message } => {
                println!("{} {}", paint("[conversation]", DIM), message);
            }
        }
    }

    debug!(messages = count, "stdin closed");
    Ok(())
}
