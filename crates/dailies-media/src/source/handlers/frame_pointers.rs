use std::sync::Arc;

use serde_json::Value;

use dailies_core::{MediaError, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::frame::AVFrameID;
use crate::source::MediaSourceActor;

/// Descriptors for every logical frame of the source, in order.
pub struct GetAllFramePointersMessage {
    pub media_type: MediaType,
}

impl Message for GetAllFramePointersMessage {
    type Response = Result<Vec<AVFrameID>, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetAllFramePointersMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetAllFramePointersMessage,
        ctx: &mut ActorContext<Self>,
    ) -> Result<Vec<AVFrameID>, MediaError> {
        let media_type = message.media_type;
        let current = self.base.current(media_type).ok_or(MediaError::NoStreams)?;
        let detail = self.current_stream_detail(media_type).await?;
        let (colour, current_stream) = if media_type == MediaType::Image {
            match self.colour_pipeline_json().await {
                Some(meta) => (meta, Some(current)),
                None => (Value::Null, None),
            }
        } else {
            (Value::Null, Some(current))
        };
        let me = ctx.weak_ref();
        Ok(self
            .base
            .media_reference()
            .uris()
            .into_iter()
            .map(|(uri, frame)| {
                self.build_frame_id(
                    uri,
                    frame,
                    media_type,
                    &detail,
                    colour.clone(),
                    current_stream,
                    Some(me.clone()),
                )
            })
            .collect())
    }
}

/// Inclusive `[first, last]` logical ranges.
pub type LogicalFrameRanges = Vec<(i64, i64)>;

/// Descriptors for a list of logical ranges. Output length always equals the
/// sum of range widths: per-frame resolution failures become blank sentinels
/// so audio-less sources and sparse ranges stay playable. The colour pipeline
/// and the stream detail are fetched once for the whole batch.
pub struct GetFramePointersMessage {
    pub media_type: MediaType,
    pub ranges: LogicalFrameRanges,
}

impl Message for GetFramePointersMessage {
    type Response = Result<Vec<Arc<AVFrameID>>, MediaError>;
}

#[async_trait::async_trait]
impl Handler<GetFramePointersMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: GetFramePointersMessage,
        ctx: &mut ActorContext<Self>,
    ) -> Result<Vec<Arc<AVFrameID>>, MediaError> {
        let media_type = message.media_type;
        if self.base.empty() {
            if self.base.error_detail().is_empty() {
                return Err(MediaError::NoStreams);
            }
            return Err(MediaError::generic(self.base.error_detail()));
        }

        let Some(current) = self.base.current(media_type) else {
            // No stream of this type at all: a full batch of blanks keeps the
            // source compatible with the frame-driven playback loop.
            let mut result = Vec::new();
            for (first, last) in &message.ranges {
                for _ in *first..=*last {
                    result.push(Arc::new(AVFrameID::blank(media_type)));
                }
            }
            return Ok(result);
        };

        let detail = self.current_stream_detail(media_type).await?;
        let (colour, current_stream) = if media_type == MediaType::Image {
            match self.colour_pipeline_json().await {
                Some(meta) => (meta, Some(current)),
                None => (Value::Null, None),
            }
        } else {
            (Value::Null, Some(current))
        };

        let me = ctx.weak_ref();
        let mut result = Vec::new();
        for (first, last) in &message.ranges {
            for logical_frame in *first..=*last {
                match self.base.media_reference().uri(logical_frame) {
                    Ok((uri, frame)) => result.push(Arc::new(self.build_frame_id(
                        uri,
                        frame,
                        media_type,
                        &detail,
                        colour.clone(),
                        current_stream,
                        Some(me.clone()),
                    ))),
                    Err(_) => result.push(Arc::new(AVFrameID::blank(media_type))),
                }
            }
        }
        Ok(result)
    }
}
