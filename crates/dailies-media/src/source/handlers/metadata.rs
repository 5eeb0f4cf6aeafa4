use tracing::debug;

use dailies_core::MediaError;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;
use crate::source::handlers::media_hook::ApplyMediaHookMessage;

/// Full metadata probe: the container URI, or the first file frame of a
/// sequence. Replies `false` when no metadata plugin is registered.
pub struct GetMetadataMessage;

impl Message for GetMetadataMessage {
    type Response = Result<bool, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetMetadataMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: GetMetadataMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<bool, MediaError> {
        self.probe_metadata().await
    }
}

/// Probe one specific file frame. Sequences only.
pub struct GetFrameMetadataMessage {
    pub file_frame: i64,
}

impl Message for GetFrameMetadataMessage {
    type Response = Result<bool, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetFrameMetadataMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetFrameMetadataMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<bool, MediaError> {
        if self.base.media_reference().container() {
            return Err(MediaError::NoFrames);
        }
        let uri = self
            .base
            .media_reference()
            .uri_from_frame(message.file_frame)?;
        let Some(probe) = self.services.metadata.clone() else {
            return Ok(false);
        };
        let metadata = probe
            .probe(&uri, Some(message.file_frame))
            .await
            .map_err(|reason| MediaError::Metadata { reason })?;
        self.store_set(metadata, format!("/metadata/media/@{}", message.file_frame))
            .await
    }
}

/// Fired from detail acquisition: probe metadata, then run the media hook
/// whether or not the probe landed.
pub struct ProbeMetadataAndHookMessage;

impl Message for ProbeMetadataAndHookMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<ProbeMetadataAndHookMessage> for MediaSourceActor {
    async fn handle(&mut self, _message: ProbeMetadataAndHookMessage, ctx: &mut ActorContext<Self>) {
        if let Err(err) = self.probe_metadata().await {
            debug!(
                source = %self.base.uuid(),
                uri = %self.base.media_reference().base_uri(),
                error = %err,
                "metadata probe failed"
            );
        }
        let _ = ctx.cast_to_self(ApplyMediaHookMessage);
    }
}
