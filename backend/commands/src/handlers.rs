/// Built-in action handlers.
///
/// Each handler is a concrete struct implementing `ActionHandler`. The UI
/// side reacts to the reply; handlers only acknowledge the action.
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use cmdgate_core::DetectionResult;

use crate::dispatch::{ActionContext, ActionHandler, ActionResponse};

// ---------------------------------------------------------------------------
// show_gallery
// ---------------------------------------------------------------------------

pub struct ShowGalleryHandler;

#[async_trait]
impl ActionHandler for ShowGalleryHandler {
    async fn handle(&self, ctx: &ActionContext, detection: &DetectionResult) -> Result<ActionResponse> {
        info!(
            session = %ctx.session_id,
            channel = %ctx.channel,
            "[Gate] Opening style gallery"
        );
        Ok(ActionResponse::ok(format!(
            "🎨 Opening the style gallery (requested with `{}`)",
            detection.original_message.trim()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdgate_core::CommandType;

    #[tokio::test]
    async fn acknowledges_gallery_request() {
        let ctx = ActionContext { session_id: "s".into(), channel: "web".into(), sender_id: "u".into() };
        let detection = DetectionResult::matched("  /Stili ", CommandType::Gallery);
        let resp = ShowGalleryHandler.handle(&ctx, &detection).await.unwrap();
        assert!(!resp.ephemeral);
        assert!(resp.text.contains("`/Stili`"));
    }
}
