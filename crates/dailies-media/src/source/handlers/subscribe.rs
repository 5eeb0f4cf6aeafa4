use tokio::sync::broadcast;

use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::events::MediaEvent;
use crate::source::MediaSourceActor;

/// Attach to this source's event group.
pub struct SubscribeMessage;

impl Message for SubscribeMessage {
    type Response = broadcast::Receiver<MediaEvent>;
}

#[async_trait::async_trait]
impl Handler<SubscribeMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: SubscribeMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> broadcast::Receiver<MediaEvent> {
        self.events.subscribe()
    }
}
