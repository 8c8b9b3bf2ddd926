//! Telemetry and structured logging for the command gate.
//!
//! Handles log redaction, JSON/console output, daily file rotation and gate event logging.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{EventLogEntry, EventLogger, GateEvent};
pub use logger::{LogFormat, init_logger};
pub use redact::redact_sensitive_data;
