use uuid::Uuid;

use dailies_core::{MediaError, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;
use crate::stream::{StreamRef, UuidStream};

/// Every stream of a media type, in registration order.
pub struct GetMediaStreamsMessage {
    pub media_type: MediaType,
}

impl Message for GetMediaStreamsMessage {
    type Response = Vec<UuidStream>;
}

#[async_trait::async_trait]
impl Handler<GetMediaStreamsMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetMediaStreamsMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Vec<UuidStream> {
        self.base
            .streams(message.media_type)
            .iter()
            .filter_map(|uuid| {
                self.streams.get(uuid).map(|stream| UuidStream {
                    uuid: *uuid,
                    stream: stream.clone(),
                })
            })
            .collect()
    }
}

/// Look up a stream by uuid.
pub struct GetMediaStreamMessage {
    pub uuid: Uuid,
}

impl Message for GetMediaStreamMessage {
    type Response = Result<StreamRef, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetMediaStreamMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetMediaStreamMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<StreamRef, MediaError> {
        self.streams
            .get(&message.uuid)
            .cloned()
            .ok_or_else(|| MediaError::generic("invalid stream uuid"))
    }
}

pub struct HasMediaTypeMessage {
    pub media_type: MediaType,
}

impl Message for HasMediaTypeMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<HasMediaTypeMessage> for MediaSourceActor {
    async fn handle(&mut self, message: HasMediaTypeMessage, _ctx: &mut ActorContext<Self>) -> bool {
        self.base.has_type(message.media_type)
    }
}
