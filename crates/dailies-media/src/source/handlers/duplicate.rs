use uuid::Uuid;

use dailies_core::{MediaError, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::handlers::add_stream::AddUuidStreamMessage;
use crate::source::handlers::current_stream::SetCurrentMediaStreamMessage;
use crate::source::handlers::json::JsonSetMessage;
use crate::source::{MediaSourceActor, UuidSource};
use crate::stream::handlers::DuplicateMessage as StreamDuplicateMessage;

/// Produce a faithful copy under fresh uuids: same reader and media
/// reference, freshly spawned stream copies in the original order, the same
/// current-stream selections, and an equal metadata tree. Streams are copied
/// one at a time (awaited) so the duplicate registers them in order; the
/// metadata copy runs only after the last stream has been re-attached. Any
/// sub-step failure aborts with that error.
pub struct DuplicateMessage;

impl Message for DuplicateMessage {
    type Response = Result<UuidSource, MediaError>;
}

#[async_trait::async_trait]
impl Handler<DuplicateMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: DuplicateMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<UuidSource, MediaError> {
        let duplicate = MediaSourceActor::spawn_with_reference(
            self.base.name(),
            self.base.reader(),
            self.base.media_reference().clone(),
            Some(Uuid::new_v4()),
            self.services.clone(),
            self.config.clone(),
        );
        let timeout = self.config.call_timeout;

        let ordered: Vec<Uuid> = self
            .base
            .streams(MediaType::Image)
            .iter()
            .chain(self.base.streams(MediaType::Audio).iter())
            .copied()
            .collect();
        for uuid in ordered {
            // Registry entries can go stale between suspension points.
            let Some(stream) = self.streams.get(&uuid).cloned() else {
                continue;
            };
            let copy = stream
                .call(StreamDuplicateMessage, timeout)
                .await
                .map_err(|err| MediaError::from_call_error("duplicate_stream", err))?;
            duplicate
                .source
                .call(
                    AddUuidStreamMessage {
                        stream: copy.clone(),
                    },
                    timeout,
                )
                .await
                .map_err(|err| MediaError::from_call_error("add_duplicated_stream", err))??;

            for media_type in [MediaType::Image, MediaType::Audio] {
                if self.base.current(media_type) == Some(uuid) {
                    duplicate
                        .source
                        .call(
                            SetCurrentMediaStreamMessage {
                                media_type,
                                uuid: copy.uuid,
                            },
                            timeout,
                        )
                        .await
                        .map_err(|err| {
                            MediaError::from_call_error("set_duplicated_current_stream", err)
                        })?;
                }
            }
        }

        let tree = self.store_get("").await?;
        duplicate
            .source
            .call(
                JsonSetMessage {
                    value: tree,
                    path: String::new(),
                },
                timeout,
            )
            .await
            .map_err(|err| MediaError::from_call_error("copy_metadata", err))??;

        Ok(duplicate)
    }
}
