use dailies_core::{MediaError, MediaType, StreamDetail};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Detail of the current stream of a media type.
pub struct GetStreamDetailMessage {
    pub media_type: MediaType,
}

impl Message for GetStreamDetailMessage {
    type Response = Result<StreamDetail, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetStreamDetailMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetStreamDetailMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<StreamDetail, MediaError> {
        self.current_stream_detail(message.media_type).await
    }
}
