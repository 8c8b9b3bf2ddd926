/// Action resolution — map a detection result to the canonical action token.
use cmdgate_core::DetectionResult;

/// Returns the action token for a command, or `None` for conversational input.
pub fn resolve_action(result: &DetectionResult) -> Option<&'static str> {
    if !result.is_command {
        return None;
    }
    result.command_type.action()
}
