pub mod handlers;

use serde_json::{Value, json};
use uuid::Uuid;

use dailies_core::{MediaError, MediaType, StreamDetail};
use dailies_runtime::actor::{ActorRef, spawn_actor};

pub type StreamRef = ActorRef<MediaStreamActor>;

/// A stream uuid paired with its mailbox.
#[derive(Clone)]
pub struct UuidStream {
    pub uuid: Uuid,
    pub stream: StreamRef,
}

/// One typed track (image or audio) inside a media source. Leaf actor: it
/// answers detail queries, duplicates itself, and serialises; everything else
/// is the owning source's business.
pub struct MediaStreamActor {
    uuid: Uuid,
    detail: StreamDetail,
}

impl MediaStreamActor {
    pub fn new(detail: StreamDetail, uuid: Uuid) -> Self {
        Self { uuid, detail }
    }

    pub fn serialise(&self) -> Value {
        json!({
            "base": {
                "type": "MediaStream",
                "uuid": self.uuid,
                "detail": self.detail,
            }
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, MediaError> {
        let base = value
            .get("base")
            .ok_or_else(|| MediaError::generic("media stream json has no base"))?;
        if base.get("type").and_then(Value::as_str) != Some("MediaStream") {
            return Err(MediaError::generic("json is not a MediaStream"));
        }
        let uuid = base
            .get("uuid")
            .and_then(Value::as_str)
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or_else(|| MediaError::generic("media stream json has no uuid"))?;
        let detail = base
            .get("detail")
            .cloned()
            .ok_or_else(|| MediaError::generic("media stream json has no detail"))?;
        let detail: StreamDetail = serde_json::from_value(detail)
            .map_err(|err| MediaError::generic(format!("bad media stream detail: {err}")))?;
        Ok(Self { uuid, detail })
    }

    pub fn media_type(&self) -> MediaType {
        self.detail.media_type
    }

    /// Spawn a stream actor and hand back its addressable pair.
    pub fn spawn(detail: StreamDetail, uuid: Uuid) -> UuidStream {
        let (stream, _join) = spawn_actor(Self::new(detail, uuid));
        UuidStream { uuid, stream }
    }

    pub fn spawn_from_json(value: &Value) -> Result<UuidStream, MediaError> {
        let actor = Self::from_json(value)?;
        let uuid = actor.uuid;
        let (stream, _join) = spawn_actor(actor);
        Ok(UuidStream { uuid, stream })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use dailies_core::{FrameRate, FrameRateDuration, MediaType, StreamDetail};

    use super::MediaStreamActor;

    #[test]
    fn serialise_round_trips() {
        let detail = StreamDetail::new(
            "rgba",
            FrameRateDuration::new(5, FrameRate::new(24, 1)),
            MediaType::Image,
            "{uri}::{frame}::{stream}",
        );
        let actor = MediaStreamActor::new(detail.clone(), Uuid::new_v4());
        let rehydrated =
            MediaStreamActor::from_json(&actor.serialise()).expect("rehydrate stream");
        assert_eq!(rehydrated.uuid, actor.uuid);
        assert_eq!(rehydrated.detail, detail);
    }

    #[test]
    fn from_json_rejects_foreign_blobs() {
        let value = serde_json::json!({"base": {"type": "Playlist", "uuid": "x"}});
        assert!(MediaStreamActor::from_json(&value).is_err());
    }
}
