use uuid::Uuid;

use dailies_core::EditList;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Single-section timeline projection of this source. The section carries
/// the caller's uuid when given (playlists rewrite identity when collating).
pub struct GetEditListMessage {
    pub uuid: Option<Uuid>,
}

impl Message for GetEditListMessage {
    type Response = EditList;
}

#[async_trait::async_trait]
impl Handler<GetEditListMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetEditListMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> EditList {
        EditList::single(
            message.uuid.unwrap_or_else(|| self.base.uuid()),
            self.base.media_reference().duration(),
            self.base.media_reference().timecode(),
        )
    }
}
