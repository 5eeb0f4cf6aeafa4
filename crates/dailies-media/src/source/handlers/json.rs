use serde_json::Value;

use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Fetch from the metadata store. Broadcasts a change like the mutating
/// forms do; UI consumers refresh on first read.
pub struct JsonGetMessage {
    pub path: String,
}

impl Message for JsonGetMessage {
    type Response = Result<Value, MediaError>;
}

#[async_trait::async_trait]
impl Handler<JsonGetMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: JsonGetMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<Value, MediaError> {
        let value = self.store_get(message.path).await;
        self.emit_changed();
        value
    }
}

/// Replace a subtree of the metadata store.
pub struct JsonSetMessage {
    pub value: Value,
    pub path: String,
}

impl Message for JsonSetMessage {
    type Response = Result<bool, MediaError>;
}

#[async_trait::async_trait]
impl Handler<JsonSetMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: JsonSetMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<bool, MediaError> {
        let done = self.store_set(message.value, message.path).await;
        self.emit_changed();
        done
    }
}

/// Deep-merge into a subtree of the metadata store.
pub struct JsonMergeMessage {
    pub value: Value,
    pub path: String,
}

impl Message for JsonMergeMessage {
    type Response = Result<bool, MediaError>;
}

#[async_trait::async_trait]
impl Handler<JsonMergeMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: JsonMergeMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<bool, MediaError> {
        let done = self.store_merge(message.value, message.path).await;
        self.emit_changed();
        done
    }
}
