use uuid::Uuid;

use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Identity of the owning playlist. Held as a weak back-reference: identity
/// and lookup only, never ownership, or the parent/child pair would cycle.
pub struct ParentGetMessage;

impl Message for ParentGetMessage {
    type Response = Option<Uuid>;
}

#[async_trait::async_trait]
impl Handler<ParentGetMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: ParentGetMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Option<Uuid> {
        self.parent
    }
}

pub struct ParentSetMessage {
    pub uuid: Uuid,
}

impl Message for ParentSetMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<ParentSetMessage> for MediaSourceActor {
    async fn handle(&mut self, message: ParentSetMessage, _ctx: &mut ActorContext<Self>) {
        self.parent = Some(message.uuid);
        self.emit_changed();
    }
}
