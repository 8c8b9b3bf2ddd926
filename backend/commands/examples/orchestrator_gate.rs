use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cmdgate_commands::{
    build_default_dispatcher, ActionContext, CommandDetector, CommandRegistry, CommandType,
    MessageRoute,
};
use cmdgate_logging::{init_logger, LogFormat};

/// Stand-in for the LLM dialogue pipeline that receives non-command messages.
async fn conversational_pipeline(message: &str) -> String {
    format!("(dialogue agent would answer: {message:?})")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger(None, "info", LogFormat::Text)?;

    let registry = CommandRegistry::builder()
        .with_builtin()
        .phrase(CommandType::Gallery, "fammi vedere gli stili")
        .build()?;
    let detector = CommandDetector::new(Arc::new(registry));
    let dispatcher = build_default_dispatcher();
    let ctx = ActionContext {
        session_id: "demo-session".into(),
        channel: "web".into(),
        sender_id: "demo-user".into(),
    };

    let inbox = [
        "Ciao! Vorrei creare un video sul mare",
        "/GALLERY",
        "mostra   galleria",
        "voglio vedere la gallery",
        "Fammi vedere gli stili",
    ];

    for message in inbox {
        let reply = match detector.route(message) {
            MessageRoute::Command { action, detection } => {
                dispatcher.dispatch(&ctx, action, &detection).await?.text
            }
            MessageRoute::Conversation { message } => conversational_pipeline(&message).await,
        };
        info!(input = message, "reply: {}", reply);
    }

    Ok(())
}
