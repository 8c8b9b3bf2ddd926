//! Gate Event Logger
//!
//! Structured gate events (command detected, action dispatched) routed through
//! `tracing` so they land in the NDJSON log alongside everything else.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GateEvent {
    CommandDetected {
        original_message: String,
        normalized: String,
        command_type: String,
        action: String,
    },
    ActionDispatched {
        session_id: String,
        action: String,
        handled: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: GateEvent,
}

pub struct EventLogger;

impl EventLogger {
    /// Redacts free-text fields, then emits the event under the `gate_events` target.
    /// Returns the entry exactly as it was logged.
    pub fn log_event(mut event: GateEvent) -> EventLogEntry {
        if let GateEvent::CommandDetected { original_message, normalized, .. } = &mut event {
            *original_message = redact_sensitive_data(original_message);
            *normalized = redact_sensitive_data(normalized);
        }

        let entry = EventLogEntry { timestamp: Utc::now(), event };
        let payload = serde_json::to_string(&entry.event).unwrap_or_default();
        info!(target: "gate_events", event = %payload, "Gate event");
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_detected_message() {
        let entry = EventLogger::log_event(GateEvent::CommandDetected {
            original_message: "/gallery Bearer abc.def".into(),
            normalized: "/gallery".into(),
            command_type: "GALLERY".into(),
            action: "show_gallery".into(),
        });
        match entry.event {
            GateEvent::CommandDetected { original_message, action, .. } => {
                assert!(original_message.contains("[REDACTED_TOKEN]"));
                assert_eq!(action, "show_gallery");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn serializes_with_type_tag() {
        let value = serde_json::to_value(GateEvent::ActionDispatched {
            session_id: "s1".into(),
            action: "show_gallery".into(),
            handled: true,
        })
        .unwrap();
        assert_eq!(value["type"], "action_dispatched");
        assert_eq!(value["handled"], true);
    }
}
