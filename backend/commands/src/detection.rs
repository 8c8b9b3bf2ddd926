/// Command detection — decide whether an inbound message is an explicit command.
///
/// Exact match only: a message is a command when its normalized form equals a
/// registered slash command, or its whitespace-collapsed form equals a
/// registered phrase. Anything else belongs to the conversational pipeline.
use std::sync::Arc;

use cmdgate_core::{CommandType, DetectionResult};
use cmdgate_logging::{EventLogger, GateEvent};

use crate::action::resolve_action;
use crate::normalize::{collapse_whitespace, normalize};
use crate::registry::CommandRegistry;
use crate::types::MessageRoute;

/// Classify `text` against `registry`. Never fails.
pub fn detect_command(text: &str, registry: &CommandRegistry) -> DetectionResult {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return DetectionResult::no_match(text);
    }

    let (command_type, matched_form) = if let Some(intent) = registry.match_command(&normalized) {
        (intent, normalized)
    } else if let Some(intent) = registry.match_phrase(&normalized) {
        (intent, collapse_whitespace(&normalized))
    } else {
        return DetectionResult::no_match(text);
    };

    let result = DetectionResult::matched(text, command_type);
    if let Some(action) = result.normalized_command.as_deref() {
        EventLogger::log_event(GateEvent::CommandDetected {
            original_message: text.to_string(),
            normalized: matched_form,
            command_type: command_type.to_string(),
            action: action.to_string(),
        });
    }
    result
}

/// Shareable detector holding the registry built at startup.
#[derive(Debug, Clone)]
pub struct CommandDetector {
    registry: Arc<CommandRegistry>,
}

impl CommandDetector {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn detect(&self, text: &str) -> DetectionResult {
        detect_command(text, &self.registry)
    }

    /// The single per-message entry point for the orchestrator.
    pub fn route(&self, text: &str) -> MessageRoute {
        let detection = self.detect(text);
        match resolve_action(&detection) {
            Some(action) => MessageRoute::Command { action, detection },
            None => MessageRoute::Conversation { message: detection.original_message },
        }
    }

    /// Shorthand for callers that only need the intent.
    pub fn classify(&self, text: &str) -> CommandType {
        self.detect(text).command_type
    }
}

impl Default for CommandDetector {
    fn default() -> Self {
        Self::new(Arc::new(CommandRegistry::builtin()))
    }
}
