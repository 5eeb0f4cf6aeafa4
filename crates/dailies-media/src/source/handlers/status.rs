use dailies_core::MediaStatus;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

pub struct StatusGetMessage;

impl Message for StatusGetMessage {
    type Response = MediaStatus;
}

#[async_trait::async_trait]
impl Handler<StatusGetMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: StatusGetMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> MediaStatus {
        self.base.status()
    }
}

/// Update the media status; broadcasts only on an actual change.
pub struct StatusSetMessage {
    pub status: MediaStatus,
}

impl Message for StatusSetMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<StatusSetMessage> for MediaSourceActor {
    async fn handle(&mut self, message: StatusSetMessage, _ctx: &mut ActorContext<Self>) -> bool {
        if self.base.status() != message.status {
            self.base.set_status(message.status);
            self.emit_changed();
        }
        true
    }
}
