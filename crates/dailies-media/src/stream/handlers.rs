use serde_json::Value;
use uuid::Uuid;

use dailies_core::{MediaType, StreamDetail};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use super::{MediaStreamActor, UuidStream};

pub struct GetUuidMessage;

impl Message for GetUuidMessage {
    type Response = Uuid;
}

#[async_trait::async_trait]
impl Handler<GetUuidMessage> for MediaStreamActor {
    async fn handle(&mut self, _message: GetUuidMessage, _ctx: &mut ActorContext<Self>) -> Uuid {
        self.uuid
    }
}

pub struct GetMediaTypeMessage;

impl Message for GetMediaTypeMessage {
    type Response = MediaType;
}

#[async_trait::async_trait]
impl Handler<GetMediaTypeMessage> for MediaStreamActor {
    async fn handle(
        &mut self,
        _message: GetMediaTypeMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> MediaType {
        self.detail.media_type
    }
}

pub struct GetStreamDetailMessage;

impl Message for GetStreamDetailMessage {
    type Response = StreamDetail;
}

#[async_trait::async_trait]
impl Handler<GetStreamDetailMessage> for MediaStreamActor {
    async fn handle(
        &mut self,
        _message: GetStreamDetailMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> StreamDetail {
        self.detail.clone()
    }
}

/// Spawn a copy of this stream under a fresh uuid.
pub struct DuplicateMessage;

impl Message for DuplicateMessage {
    type Response = UuidStream;
}

#[async_trait::async_trait]
impl Handler<DuplicateMessage> for MediaStreamActor {
    async fn handle(
        &mut self,
        _message: DuplicateMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> UuidStream {
        MediaStreamActor::spawn(self.detail.clone(), Uuid::new_v4())
    }
}

pub struct SerialiseMessage;

impl Message for SerialiseMessage {
    type Response = Value;
}

#[async_trait::async_trait]
impl Handler<SerialiseMessage> for MediaStreamActor {
    async fn handle(&mut self, _message: SerialiseMessage, _ctx: &mut ActorContext<Self>) -> Value {
        self.serialise()
    }
}

pub struct ShutdownMessage;

impl Message for ShutdownMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<ShutdownMessage> for MediaStreamActor {
    async fn handle(&mut self, _message: ShutdownMessage, ctx: &mut ActorContext<Self>) {
        ctx.stop();
    }
}
