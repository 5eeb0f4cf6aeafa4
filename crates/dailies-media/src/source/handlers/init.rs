use serde_json::{Map, Value};

use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Construction-time setup, run as the first message in the mailbox.
pub struct InitMessage;

impl Message for InitMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<InitMessage> for MediaSourceActor {
    async fn handle(&mut self, _message: InitMessage, ctx: &mut ActorContext<Self>) {
        // Placeholder colour-pipeline document: image frame requests read
        // this path every time and expect it to exist.
        if self.store_get("/colour_pipeline").await.is_err() {
            let _ = self
                .store_set(Value::Object(Map::new()), "/colour_pipeline")
                .await;
        }

        if let Some(scanner) = self.services.scanner.clone()
            && let Some(me) = ctx.actor_ref()
        {
            scanner.schedule(self.base.media_reference().clone(), me);
        }
    }
}
