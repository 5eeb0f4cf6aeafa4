use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::events::MediaEvent;
use crate::source::MediaSourceActor;
use crate::stream::handlers::{GetMediaTypeMessage, GetUuidMessage};
use crate::stream::{StreamRef, UuidStream};

/// Adopt an existing stream actor; its uuid is queried first.
pub struct AddMediaStreamMessage {
    pub stream: StreamRef,
}

impl Message for AddMediaStreamMessage {
    type Response = Result<UuidStream, MediaError>;
}

#[async_trait::async_trait]
impl Handler<AddMediaStreamMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: AddMediaStreamMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<UuidStream, MediaError> {
        let uuid = message
            .stream
            .call(GetUuidMessage, self.config.call_timeout)
            .await
            .map_err(|err| MediaError::from_call_error("get_stream_uuid", err))?;
        self.register_stream(UuidStream {
            uuid,
            stream: message.stream,
        })
        .await
    }
}

/// Adopt a stream whose uuid is already known.
pub struct AddUuidStreamMessage {
    pub stream: UuidStream,
}

impl Message for AddUuidStreamMessage {
    type Response = Result<UuidStream, MediaError>;
}

#[async_trait::async_trait]
impl Handler<AddUuidStreamMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: AddUuidStreamMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<UuidStream, MediaError> {
        self.register_stream(message.stream).await
    }
}

impl MediaSourceActor {
    async fn register_stream(&mut self, entry: UuidStream) -> Result<UuidStream, MediaError> {
        let media_type = entry
            .stream
            .call(GetMediaTypeMessage, self.config.call_timeout)
            .await
            .map_err(|err| MediaError::from_call_error("get_stream_media_type", err))?;
        self.streams.insert(entry.uuid, entry.stream.clone());
        self.base.add_media_stream(media_type, entry.uuid);
        self.emit_changed();
        self.events.emit(MediaEvent::AddMediaStream {
            source: self.base.uuid(),
            stream: entry.uuid,
        });
        Ok(entry)
    }
}
