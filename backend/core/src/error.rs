use thiserror::Error;

use crate::types::CommandType;

/// Errors raised while building a command registry.
///
/// Detection itself never fails; these only surface at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("invalid slash command {trigger:?}: {reason}")]
    InvalidCommand { trigger: String, reason: String },

    #[error("invalid phrase {trigger:?}: {reason}")]
    InvalidPhrase { trigger: String, reason: String },

    #[error("trigger {trigger:?} is already registered for {existing}")]
    DuplicateTrigger { trigger: String, existing: CommandType },

    #[error("intent {0} cannot carry triggers")]
    UnroutableIntent(CommandType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_trigger() {
        let err = GateError::DuplicateTrigger { trigger: "/gallery".into(), existing: CommandType::Gallery };
        assert_eq!(err.to_string(), "trigger \"/gallery\" is already registered for GALLERY");
        assert_eq!(
            GateError::UnroutableIntent(CommandType::None).to_string(),
            "intent NONE cannot carry triggers"
        );
    }
}
