use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;
use crate::store::handlers::ShutdownMessage as StoreShutdownMessage;
use crate::stream::handlers::ShutdownMessage as StreamShutdownMessage;

/// Stop the source and its children: streams first, then the metadata store,
/// then the mailbox itself.
pub struct ShutdownMessage;

impl Message for ShutdownMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<ShutdownMessage> for MediaSourceActor {
    async fn handle(&mut self, _message: ShutdownMessage, ctx: &mut ActorContext<Self>) {
        for (_, stream) in self.streams.drain() {
            let _ = stream.cast(StreamShutdownMessage);
        }
        self.base.clear_streams();
        let _ = self.json_store.cast(StoreShutdownMessage);
        ctx.stop();
    }
}
