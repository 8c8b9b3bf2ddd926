//! CLI Detect / Triggers Commands
//!
//! One-shot classification of a message and a listing of the trigger registry.

use anyhow::Result;
use cmdgate_commands::{resolve_action, CommandDetector};
use serde_json::json;

use crate::terminal_output::{paint, BOLD, CYAN, DIM};

pub fn run_detect(detector: &CommandDetector, message: &str) -> Result<()> {
    let detection = detector.detect(message);
    let action = resolve_action(&detection);
    let out = json!({ "detection": detection, "action": action });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

pub fn run_triggers(detector: &CommandDetector, as_json: bool) -> Result<()> {
    let registry = detector.registry();

    if as_json {
        let intents: Vec<_> = registry
            .intents()
            .map(|(intent, set)| {
                json!({
                    "intent": intent,
                    "action": intent.action(),
                    "commands": set.commands,
                    "phrases": set.phrases,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&intents)?);
        return Ok(());
    }

    for (intent, set) in registry.intents() {
        println!(
            "{} {}",
            paint(intent.as_str(), BOLD),
            paint(&format!("→ {}", intent.action().unwrap_or("-")), DIM)
        );
        for command in &set.commands {
            println!("  {}", paint(command, CYAN));
        }
        for phrase in &set.phrases {
            println!("  \"{}\"", phrase);
        }
    }
    println!("\n{} triggers", registry.len());
    Ok(())
}
