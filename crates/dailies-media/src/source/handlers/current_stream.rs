use uuid::Uuid;

use dailies_core::{MediaError, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;
use crate::stream::UuidStream;

pub struct CurrentMediaStreamMessage {
    pub media_type: MediaType,
}

impl Message for CurrentMediaStreamMessage {
    type Response = Result<UuidStream, MediaError>;
}

#[async_trait::async_trait]
impl Handler<CurrentMediaStreamMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: CurrentMediaStreamMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<UuidStream, MediaError> {
        self.current_stream(message.media_type)
            .ok_or(MediaError::NoStreams)
    }
}

/// Repoint the current stream of a media type. Accepted only for a known
/// stream of that type; broadcasts on acceptance.
pub struct SetCurrentMediaStreamMessage {
    pub media_type: MediaType,
    pub uuid: Uuid,
}

impl Message for SetCurrentMediaStreamMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<SetCurrentMediaStreamMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: SetCurrentMediaStreamMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> bool {
        let accepted = self.base.set_current(message.media_type, message.uuid);
        if accepted {
            self.emit_changed();
        }
        accepted
    }
}
