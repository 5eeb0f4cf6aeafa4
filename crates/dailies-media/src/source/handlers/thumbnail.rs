use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use dailies_core::MediaType;
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::services::ThumbnailReply;
use crate::source::MediaSourceActor;

/// Render a thumbnail at a normalised position in `[0, 1]`. The result is
/// pushed to `requester` when the render resolves; the render itself runs off
/// the mailbox so the source stays responsive.
pub struct GetThumbnailMessage {
    pub position: f32,
    pub job: Uuid,
    pub requester: UnboundedSender<ThumbnailReply>,
}

impl Message for GetThumbnailMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<GetThumbnailMessage> for MediaSourceActor {
    async fn handle(&mut self, message: GetThumbnailMessage, ctx: &mut ActorContext<Self>) {
        let GetThumbnailMessage {
            position,
            job,
            requester,
        } = message;

        let Some(renderer) = self.services.thumbnails.clone() else {
            let _ = requester.send(ThumbnailReply {
                buffer: None,
                position: 0.0,
                job,
                error: "no thumbnail renderer".to_string(),
            });
            return;
        };

        let frame_count = self.base.media_reference().frame_count();
        let logical_frame = ((frame_count as f32 * position).round() as i64)
            .clamp(0, (frame_count - 1).max(0));

        let me = ctx.weak_ref();
        match self
            .resolve_single_frame(MediaType::Image, logical_frame, Some(me))
            .await
        {
            Ok(frame) => {
                dailies_runtime::spawn(async move {
                    match renderer.render(frame, job).await {
                        Ok(buffer) => {
                            let _ = requester.send(ThumbnailReply {
                                buffer: Some(Arc::new(buffer)),
                                position,
                                job,
                                error: String::new(),
                            });
                        }
                        Err(error) => {
                            let _ = requester.send(ThumbnailReply {
                                buffer: None,
                                position: 0.0,
                                job,
                                error,
                            });
                        }
                    }
                });
            }
            Err(err) => {
                let _ = requester.send(ThumbnailReply {
                    buffer: None,
                    position: 0.0,
                    job,
                    error: err.to_string(),
                });
            }
        }
    }
}

/// Cancel an in-flight thumbnail render; forwarded verbatim to the renderer.
pub struct CancelThumbnailMessage {
    pub job: Uuid,
}

impl Message for CancelThumbnailMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<CancelThumbnailMessage> for MediaSourceActor {
    async fn handle(&mut self, message: CancelThumbnailMessage, _ctx: &mut ActorContext<Self>) {
        if let Some(renderer) = self.services.thumbnails.as_ref() {
            renderer.cancel(message.job);
        }
    }
}
