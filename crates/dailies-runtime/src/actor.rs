//! Mailbox actors for the media subsystem.
//!
//! An actor owns its state outright; its mailbox applies one message at a
//! time, in arrival order, on the shared runtime. Requests are either `cast`
//! (fire-and-forget) or `call` (awaited reply with a deadline). Values that
//! outlive the actor, such as frame descriptors, carry a [`WeakActorRef`]:
//! identity and re-entry while the actor lives, never ownership. The actor's
//! own address lives in its [`ActorContext`], so handlers can queue
//! follow-up work without threading handles through every message.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

pub trait Message: Send + 'static {
    type Response: Send + 'static;
}

#[async_trait::async_trait]
pub trait Handler<M: Message>: Send + Sized + 'static {
    async fn handle(&mut self, message: M, ctx: &mut ActorContext<Self>) -> M::Response;
}

/// A queued message with its reply slot; casts simply leave the slot empty.
struct Deliver<M: Message> {
    message: M,
    reply: Option<oneshot::Sender<M::Response>>,
}

trait Apply<A>: Send {
    fn apply<'a>(
        self: Box<Self>,
        actor: &'a mut A,
        ctx: &'a mut ActorContext<A>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

impl<M, A> Apply<A> for Deliver<M>
where
    M: Message,
    A: Handler<M>,
{
    fn apply<'a>(
        self: Box<Self>,
        actor: &'a mut A,
        ctx: &'a mut ActorContext<A>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        let Deliver { message, reply } = *self;
        Box::pin(async move {
            let response = actor.handle(message, ctx).await;
            if let Some(reply) = reply {
                let _ = reply.send(response);
            }
        })
    }
}

/// The actor's mailbox is gone; the message was not delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxClosed;

/// Why a `call` produced no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallError {
    /// The mailbox is gone, or the actor stopped before replying.
    Disconnected,
    /// No reply within the deadline.
    TimedOut,
}

pub struct ActorRef<A> {
    tx: mpsc::UnboundedSender<Box<dyn Apply<A>>>,
}

impl<A> Clone for ActorRef<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A: Send + 'static> ActorRef<A> {
    /// Weak form of this handle: keeps the actor addressable without keeping
    /// it alive.
    pub fn downgrade(&self) -> WeakActorRef<A> {
        WeakActorRef {
            tx: self.tx.downgrade(),
        }
    }

    pub fn cast<M>(&self, message: M) -> Result<(), MailboxClosed>
    where
        M: Message<Response = ()>,
        A: Handler<M>,
    {
        self.deliver(message, None)
    }

    pub async fn call<M>(&self, message: M, deadline: Duration) -> Result<M::Response, CallError>
    where
        M: Message,
        A: Handler<M>,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.deliver(message, Some(reply_tx))
            .map_err(|MailboxClosed| CallError::Disconnected)?;
        match tokio::time::timeout(deadline, reply_rx).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(_)) => Err(CallError::Disconnected),
            Err(_) => Err(CallError::TimedOut),
        }
    }

    fn deliver<M>(
        &self,
        message: M,
        reply: Option<oneshot::Sender<M::Response>>,
    ) -> Result<(), MailboxClosed>
    where
        M: Message,
        A: Handler<M>,
    {
        let delivery: Box<dyn Apply<A>> = Box::new(Deliver { message, reply });
        self.tx.send(delivery).map_err(|_| MailboxClosed)
    }
}

pub struct WeakActorRef<A> {
    tx: mpsc::WeakUnboundedSender<Box<dyn Apply<A>>>,
}

impl<A> Clone for WeakActorRef<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A: Send + 'static> WeakActorRef<A> {
    /// Recover a usable handle while the actor is still running.
    pub fn upgrade(&self) -> Option<ActorRef<A>> {
        let tx = self.tx.upgrade()?;
        if tx.is_closed() {
            return None;
        }
        Some(ActorRef { tx })
    }
}

/// Per-message view of the running actor: cooperative stop and the actor's
/// own address.
pub struct ActorContext<A> {
    stopping: bool,
    weak: WeakActorRef<A>,
}

impl<A: Send + 'static> ActorContext<A> {
    /// Stop after the current message completes; the rest of the queue is
    /// dropped.
    pub fn stop(&mut self) {
        self.stopping = true;
    }

    /// Weak handle to this actor, for values that may outlive it.
    pub fn weak_ref(&self) -> WeakActorRef<A> {
        self.weak.clone()
    }

    /// Strong handle to this actor. `None` once every external handle is
    /// gone: the backlog still drains, but nothing new may keep the actor
    /// alive.
    pub fn actor_ref(&self) -> Option<ActorRef<A>> {
        self.weak.upgrade()
    }

    /// Queue a follow-up message behind the one being handled.
    pub fn cast_to_self<M>(&self, message: M) -> Result<(), MailboxClosed>
    where
        M: Message<Response = ()>,
        A: Handler<M>,
    {
        match self.weak.upgrade() {
            Some(me) => me.cast(message),
            None => Err(MailboxClosed),
        }
    }
}

pub fn spawn_actor<A: Send + 'static>(actor: A) -> (ActorRef<A>, JoinHandle<()>) {
    let (tx, rx) = mpsc::unbounded_channel::<Box<dyn Apply<A>>>();
    let handle = ActorRef { tx };
    let weak = handle.downgrade();
    let join = crate::spawn(drain_mailbox(actor, rx, weak));
    (handle, join)
}

/// Apply queued messages until the handles drop, the actor asks to stop, or
/// a handler panics; after a panic callers observe a disconnect.
async fn drain_mailbox<A: Send + 'static>(
    mut actor: A,
    mut rx: mpsc::UnboundedReceiver<Box<dyn Apply<A>>>,
    weak: WeakActorRef<A>,
) {
    let mut ctx = ActorContext {
        stopping: false,
        weak,
    };
    while let Some(delivery) = rx.recv().await {
        let outcome = AssertUnwindSafe(delivery.apply(&mut actor, &mut ctx))
            .catch_unwind()
            .await;
        if outcome.is_err() || ctx.stopping {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ActorContext, CallError, Handler, Message, spawn_actor};

    const DEADLINE: Duration = Duration::from_millis(200);

    #[derive(Default)]
    struct ShotLog {
        entries: Vec<String>,
    }

    struct Record(String);
    impl Message for Record {
        type Response = ();
    }

    struct RecordTwice(String);
    impl Message for RecordTwice {
        type Response = ();
    }

    struct Entries;
    impl Message for Entries {
        type Response = Vec<String>;
    }

    struct Halt;
    impl Message for Halt {
        type Response = ();
    }

    #[async_trait::async_trait]
    impl Handler<Record> for ShotLog {
        async fn handle(&mut self, message: Record, _ctx: &mut ActorContext<Self>) {
            self.entries.push(message.0);
        }
    }

    #[async_trait::async_trait]
    impl Handler<RecordTwice> for ShotLog {
        async fn handle(&mut self, message: RecordTwice, ctx: &mut ActorContext<Self>) {
            self.entries.push(message.0.clone());
            ctx.cast_to_self(Record(message.0)).expect("self cast");
        }
    }

    #[async_trait::async_trait]
    impl Handler<Entries> for ShotLog {
        async fn handle(
            &mut self,
            _message: Entries,
            _ctx: &mut ActorContext<Self>,
        ) -> Vec<String> {
            self.entries.clone()
        }
    }

    #[async_trait::async_trait]
    impl Handler<Halt> for ShotLog {
        async fn handle(&mut self, _message: Halt, ctx: &mut ActorContext<Self>) {
            ctx.stop();
        }
    }

    #[test]
    fn casts_apply_in_order_before_a_call() {
        crate::block_on(async {
            let (log, join) = spawn_actor(ShotLog::default());
            log.cast(Record("a".to_string())).expect("cast");
            log.cast(Record("b".to_string())).expect("cast");
            let entries = log.call(Entries, DEADLINE).await.expect("call entries");
            assert_eq!(entries, vec!["a".to_string(), "b".to_string()]);
            drop(log);
            join.await.expect("join mailbox");
        });
    }

    #[test]
    fn self_casts_queue_behind_the_current_message() {
        crate::block_on(async {
            let (log, join) = spawn_actor(ShotLog::default());
            log.call(RecordTwice("key".to_string()), DEADLINE)
                .await
                .expect("call record twice");
            let entries = log.call(Entries, DEADLINE).await.expect("call entries");
            assert_eq!(entries, vec!["key".to_string(), "key".to_string()]);
            drop(log);
            join.await.expect("join mailbox");
        });
    }

    #[test]
    fn weak_handles_stop_resolving_after_shutdown() {
        crate::block_on(async {
            let (log, join) = spawn_actor(ShotLog::default());
            let weak = log.downgrade();
            assert!(weak.upgrade().is_some());

            log.call(Halt, DEADLINE).await.expect("call halt");
            drop(log);
            join.await.expect("join mailbox");
            assert!(weak.upgrade().is_none());
        });
    }

    #[test]
    fn calls_fail_fast_once_the_actor_stopped() {
        crate::block_on(async {
            let (log, join) = spawn_actor(ShotLog::default());
            log.call(Halt, DEADLINE).await.expect("call halt");
            join.await.expect("join mailbox");
            let err = log
                .call(Entries, DEADLINE)
                .await
                .expect_err("stopped actor must not answer");
            assert_eq!(err, CallError::Disconnected);
        });
    }

    #[test]
    fn slow_handlers_hit_the_deadline() {
        struct Dawdle;
        impl Message for Dawdle {
            type Response = u8;
        }

        #[async_trait::async_trait]
        impl Handler<Dawdle> for ShotLog {
            async fn handle(&mut self, _message: Dawdle, _ctx: &mut ActorContext<Self>) -> u8 {
                tokio::time::sleep(Duration::from_millis(80)).await;
                9
            }
        }

        crate::block_on(async {
            let (log, join) = spawn_actor(ShotLog::default());
            let err = log
                .call(Dawdle, Duration::from_millis(10))
                .await
                .expect_err("expected a deadline miss");
            assert_eq!(err, CallError::TimedOut);
            drop(log);
            join.await.expect("join mailbox");
        });
    }

    #[test]
    fn a_panicking_handler_reads_as_a_disconnect() {
        struct Explode;
        impl Message for Explode {
            type Response = u8;
        }

        #[async_trait::async_trait]
        impl Handler<Explode> for ShotLog {
            async fn handle(&mut self, _message: Explode, _ctx: &mut ActorContext<Self>) -> u8 {
                panic!("panic in handler");
            }
        }

        crate::block_on(async {
            let (log, join) = spawn_actor(ShotLog::default());
            let err = log
                .call(Explode, DEADLINE)
                .await
                .expect_err("panicking call must fail");
            assert_eq!(err, CallError::Disconnected);
            assert!(log.call(Entries, DEADLINE).await.is_err());
            drop(log);
            join.await.expect("join mailbox");
        });
    }
}
