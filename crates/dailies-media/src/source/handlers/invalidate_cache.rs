use futures_util::future::join_all;

use dailies_core::{MediaError, MediaKey, MediaType};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;

/// Erase every key this source could have put in the image and audio caches.
/// All registered caches are awaited; the reply is the union of what they
/// actually erased, empty when no cache is registered.
pub struct InvalidateCacheMessage;

impl Message for InvalidateCacheMessage {
    type Response = Result<Vec<MediaKey>, MediaError>;
}

#[async_trait::async_trait]
impl Handler<InvalidateCacheMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        _message: InvalidateCacheMessage,
        _ctx: &mut ActorContext<Self>,
    ) -> Result<Vec<MediaKey>, MediaError> {
        if self.base.empty() {
            if self.base.error_detail().is_empty() {
                return Err(MediaError::NoStreams);
            }
            return Err(MediaError::generic(self.base.error_detail()));
        }

        let mut keys = Vec::new();
        for media_type in [MediaType::Image, MediaType::Audio] {
            if self.base.current(media_type).is_some() {
                keys.extend(self.media_keys(media_type, &[]).await?);
            }
        }

        let caches: Vec<_> = [
            self.services.image_cache.clone(),
            self.services.audio_cache.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if caches.is_empty() {
            return Ok(Vec::new());
        }

        let mut erased = Vec::new();
        for outcome in join_all(caches.iter().map(|cache| cache.erase(&keys))).await {
            erased.extend(outcome.map_err(|reason| MediaError::Cache { reason })?);
        }
        Ok(erased)
    }
}
