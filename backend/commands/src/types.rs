/// Gate-level types shared by detection, dispatch and the CLI.
use serde::{Deserialize, Serialize};

use cmdgate_core::DetectionResult;

// ---------------------------------------------------------------------------
// Trigger kind
// ---------------------------------------------------------------------------

/// Which exact-match set a trigger lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    /// Slash token such as `/gallery`.
    Command,
    /// Spoken phrase such as `mostra gallery`.
    Phrase,
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// Where an inbound message goes after the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum MessageRoute {
    /// Short-circuit: dispatch `action` directly.
    Command {
        action: &'static str,
        detection: DetectionResult,
    },
    /// Hand the untouched message to the conversational pipeline.
    Conversation { message: String },
}

impl MessageRoute {
    pub fn is_command(&self) -> bool {
        matches!(self, MessageRoute::Command { .. })
    }
}
