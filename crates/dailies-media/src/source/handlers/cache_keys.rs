use dailies_core::{MediaError, MediaKey, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Cache keys for the given logical frames; an empty list means every frame.
/// Explicit requests are positional: a failed frame yields an empty key, the
/// output length always equals the input length.
pub struct MediaKeysMessage {
    pub media_type: MediaType,
    pub logical_frames: Vec<i64>,
}

impl Message for MediaKeysMessage {
    type Response = Result<Vec<MediaKey>, MediaError>;
}

#[async_trait::async_trait]
impl Handler<MediaKeysMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: MediaKeysMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<Vec<MediaKey>, MediaError> {
        self.media_keys(message.media_type, &message.logical_frames)
            .await
    }
}

/// Cache key of a single logical frame.
pub struct MediaKeyMessage {
    pub media_type: MediaType,
    pub logical_frame: i64,
}

impl Message for MediaKeyMessage {
    type Response = Result<MediaKey, MediaError>;
}

#[async_trait::async_trait]
impl Handler<MediaKeyMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: MediaKeyMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<MediaKey, MediaError> {
        let keys = self
            .media_keys(message.media_type, &[message.logical_frame])
            .await?;
        keys.into_iter()
            .next()
            .ok_or_else(|| MediaError::generic("no keys for frames"))
    }
}
