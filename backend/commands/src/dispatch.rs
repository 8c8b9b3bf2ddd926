/// Action dispatch — route canonical action tokens to handler implementations.
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use cmdgate_core::DetectionResult;
use cmdgate_logging::{EventLogger, GateEvent};

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

/// Context passed to every action handler.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub session_id: String,
    pub channel: String,
    pub sender_id: String,
}

/// The reply produced by an action handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub text: String,
    pub ephemeral: bool, // only visible to the invoker
}

impl ActionResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into(), ephemeral: false }
    }
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self { text: text.into(), ephemeral: true }
    }
}

#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(&self, ctx: &ActionContext, detection: &DetectionResult) -> Result<ActionResponse>;
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

pub struct ActionDispatcher {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    pub fn register(&mut self, action: impl Into<String>, handler: Arc<dyn ActionHandler>) {
        self.handlers.insert(action.into(), handler);
    }

    pub fn actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        actions.sort_unstable();
        actions
    }

    /// Run the handler for `action`. Unknown actions get an ephemeral notice, not an error.
    pub async fn dispatch(
        &self,
        ctx: &ActionContext,
        action: &str,
        detection: &DetectionResult,
    ) -> Result<ActionResponse> {
        let handler = self.handlers.get(action);
        EventLogger::log_event(GateEvent::ActionDispatched {
            session_id: ctx.session_id.clone(),
            action: action.to_string(),
            handled: handler.is_some(),
        });

        match handler {
            Some(handler) => {
                info!("[Gate] Dispatching {} in session {}", action, ctx.session_id);
                handler.handle(ctx, detection).await
            }
            None => {
                warn!("[Gate] No handler registered for action {}", action);
                Ok(ActionResponse::ephemeral(format!("No handler registered for action `{}`", action)))
            }
        }
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self { Self::new() }
}
