use dailies_core::{MediaError, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::frame::AVFrameID;
use crate::source::MediaSourceActor;

/// Resolve one logical frame of the current stream into a decode-ready
/// descriptor. Fails `NoStreams` without a current stream and
/// `InvalidFrameIndex` outside the timeline.
pub struct GetFramePointerMessage {
    pub media_type: MediaType,
    pub logical_frame: i64,
}

impl Message for GetFramePointerMessage {
    type Response = Result<AVFrameID, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetFramePointerMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetFramePointerMessage,
        ctx: &mut ActorContext<Self>,
    ) -> Result<AVFrameID, MediaError> {
        let me = ctx.weak_ref();
        self.resolve_single_frame(message.media_type, message.logical_frame, Some(me))
            .await
    }
}
