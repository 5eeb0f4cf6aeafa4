use uuid::Uuid;

use dailies_core::MediaReference;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

pub struct MediaReferenceGetMessage;

impl Message for MediaReferenceGetMessage {
    type Response = MediaReference;
}

#[async_trait::async_trait]
impl Handler<MediaReferenceGetMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: MediaReferenceGetMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> MediaReference {
        self.base.media_reference().clone()
    }
}

pub struct MediaReferenceSetMessage {
    pub media_reference: MediaReference,
}

impl Message for MediaReferenceSetMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<MediaReferenceSetMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: MediaReferenceSetMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> bool {
        self.base.set_media_reference(message.media_reference);
        self.emit_changed();
        true
    }
}

/// The reference tagged with a uuid: the caller's when given, this source's
/// otherwise. Playlists use this to collate references from many sources.
pub struct MediaReferencePairMessage {
    pub uuid: Option<Uuid>,
}

impl Message for MediaReferencePairMessage {
    type Response = (Uuid, MediaReference);
}

#[async_trait::async_trait]
impl Handler<MediaReferencePairMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: MediaReferencePairMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> (Uuid, MediaReference) {
        (
            message.uuid.unwrap_or_else(|| self.base.uuid()),
            self.base.media_reference().clone(),
        )
    }
}
