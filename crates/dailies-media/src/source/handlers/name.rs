use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::events::MediaEvent;
use crate::source::MediaSourceActor;

pub struct NameGetMessage;

impl Message for NameGetMessage {
    type Response = String;
}

#[async_trait::async_trait]
impl Handler<NameGetMessage> for MediaSourceActor {
    async fn handle(&mut self, _message: NameGetMessage, _ctx: &mut ActorContext<Self>) -> String {
        self.base.name().to_string()
    }
}

pub struct NameSetMessage {
    pub name: String,
}

impl Message for NameSetMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<NameSetMessage> for MediaSourceActor {
    async fn handle(&mut self, message: NameSetMessage, _ctx: &mut ActorContext<Self>) {
        self.base.set_name(message.name.clone());
        self.events.emit(MediaEvent::Name {
            uuid: self.base.uuid(),
            name: message.name,
        });
        self.emit_changed();
    }
}
