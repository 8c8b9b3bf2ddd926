pub mod action;
pub mod detection;
pub mod dispatch;
pub mod handlers;
pub mod normalize;
pub mod registry;
pub mod types;

pub use action::resolve_action;
pub use detection::{detect_command, CommandDetector};
pub use dispatch::{ActionContext, ActionDispatcher, ActionHandler, ActionResponse};
pub use handlers::ShowGalleryHandler;
pub use normalize::{collapse_whitespace, normalize};
pub use registry::{validate_command, validate_phrase, CommandRegistry, RegistryBuilder, TriggerSet};
pub use types::{MessageRoute, TriggerKind};

pub use cmdgate_core::{CommandType, DetectionResult, GateError, SHOW_GALLERY};

/// Build a dispatcher pre-wired with all built-in handlers.
pub fn build_default_dispatcher() -> ActionDispatcher {
    use std::sync::Arc;

    let mut dispatcher = ActionDispatcher::new();
    dispatcher.register(SHOW_GALLERY, Arc::new(ShowGalleryHandler));
    dispatcher
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_routable_intent_has_a_handler() {
        let dispatcher = build_default_dispatcher();
        for intent in CommandType::ROUTABLE {
            let action = intent.action().unwrap();
            assert!(dispatcher.actions().contains(&action), "no handler for {action}");
        }
    }
}
