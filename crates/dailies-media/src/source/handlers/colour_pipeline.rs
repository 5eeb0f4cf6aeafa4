use serde_json::Value;

use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// The colour-pipeline configuration attached to every image frame request.
pub struct GetColourPipelineMessage;

impl Message for GetColourPipelineMessage {
    type Response = Result<Value, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetColourPipelineMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: GetColourPipelineMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<Value, MediaError> {
        self.store_get("/colour_pipeline").await
    }
}

pub struct SetColourPipelineMessage {
    pub params: Value,
}

impl Message for SetColourPipelineMessage {
    type Response = Result<bool, MediaError>;
}

#[async_trait::async_trait]
impl Handler<SetColourPipelineMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: SetColourPipelineMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<bool, MediaError> {
        let done = self.store_set(message.params, "/colour_pipeline").await;
        self.emit_changed();
        done
    }
}
