use futures_util::future::join_all;
use serde_json::{Map, Value, json};

use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;
use crate::stream::handlers::SerialiseMessage as StreamSerialiseMessage;

/// Serialise the source: base record, the full metadata tree, and every
/// stream keyed by uuid. Streams serialise concurrently; all are awaited.
/// Feeding the blob back through `spawn_from_json` reconstructs an
/// equivalent source.
pub struct SerialiseMessage;

impl Message for SerialiseMessage {
    type Response = Result<Value, MediaError>;
}

#[async_trait::async_trait]
impl Handler<SerialiseMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: SerialiseMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<Value, MediaError> {
        let meta = self.store_get("").await?;

        let timeout = self.config.call_timeout;
        let pending: Vec<_> = self
            .streams
            .values()
            .map(|stream| stream.call(StreamSerialiseMessage, timeout))
            .collect();

        let mut actors = Map::new();
        for outcome in join_all(pending).await {
            let blob =
                outcome.map_err(|err| MediaError::from_call_error("serialise_stream", err))?;
            let Some(uuid) = blob
                .pointer("/base/uuid")
                .and_then(Value::as_str)
                .map(str::to_string)
            else {
                return Err(MediaError::generic("stream serialisation has no uuid"));
            };
            actors.insert(uuid, blob);
        }

        Ok(json!({
            "base": self.base.serialise()?,
            "store": meta,
            "actors": actors,
        }))
    }
}
