use tracing::debug;

use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Run the post-probe enrichment hook. An absent hook registry replies
/// `false`; it is not an error.
pub struct GetMediaHookMessage;

impl Message for GetMediaHookMessage {
    type Response = Result<bool, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetMediaHookMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: GetMediaHookMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<bool, MediaError> {
        self.apply_media_hook().await
    }
}

/// Fire-and-forget form used by the detail-acquisition flow.
pub struct ApplyMediaHookMessage;

impl Message for ApplyMediaHookMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<ApplyMediaHookMessage> for MediaSourceActor {
    async fn handle(&mut self, _message: ApplyMediaHookMessage, _ctx: &mut ActorContext<Self>) {
        if let Err(err) = self.apply_media_hook().await {
            debug!(source = %self.base.uuid(), error = %err, "media hook failed");
        }
    }
}
