pub mod base;
pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use dailies_core::{
    FrameList, FrameRate, MediaError, MediaKey, MediaReference, MediaType, StreamDetail,
};
use dailies_runtime::actor::{ActorRef, WeakActorRef, spawn_actor};

use crate::config::SourceConfig;
use crate::events::{EventHub, MediaEvent};
use crate::frame::AVFrameID;
use crate::services::MediaServices;
use crate::store::handlers::{GetJsonMessage, MergeJsonMessage, SetJsonMessage};
use crate::store::{StoreRef, spawn_store};
use crate::stream::handlers::GetStreamDetailMessage;
use crate::stream::{MediaStreamActor, StreamRef, UuidStream};

pub use base::MediaSourceBase;

pub type SourceRef = ActorRef<MediaSourceActor>;
pub type WeakSourceRef = WeakActorRef<MediaSourceActor>;

/// A source uuid paired with its mailbox.
#[derive(Clone)]
pub struct UuidSource {
    pub uuid: Uuid,
    pub source: SourceRef,
}

/// The authoritative owner of one physical media asset. Resolves logical
/// frame positions to decode-ready descriptors, owns the typed stream actors
/// and the metadata store, and broadcasts every state transition.
pub struct MediaSourceActor {
    base: MediaSourceBase,
    streams: HashMap<Uuid, StreamRef>,
    json_store: StoreRef,
    events: Arc<EventHub>,
    services: Arc<MediaServices>,
    config: SourceConfig,
    parent: Option<Uuid>,
}

impl MediaSourceActor {
    /// Container source: a single self-contained file. Detail acquisition is
    /// scheduled asynchronously; `rate` is the fallback when probing cannot
    /// determine one.
    pub fn spawn_container(
        name: &str,
        uri: Url,
        rate: FrameRate,
        uuid: Option<Uuid>,
        services: Arc<MediaServices>,
        config: SourceConfig,
    ) -> UuidSource {
        let mut base = MediaSourceBase::new(name, MediaReference::new_container(uri));
        if let Some(uuid) = uuid {
            base.set_uuid(uuid);
        }
        Self::spawn_parts(base, Value::Null, Vec::new(), services, config, Some(rate))
    }

    /// Sequence source: numbered frame files. The declared frame list stays
    /// authoritative through probing.
    pub fn spawn_sequence(
        name: &str,
        uri: Url,
        frame_list: FrameList,
        rate: FrameRate,
        uuid: Option<Uuid>,
        services: Arc<MediaServices>,
        config: SourceConfig,
    ) -> UuidSource {
        let mut base = MediaSourceBase::new(name, MediaReference::new_sequence(uri, frame_list, rate));
        if let Some(uuid) = uuid {
            base.set_uuid(uuid);
        }
        Self::spawn_parts(base, Value::Null, Vec::new(), services, config, Some(rate))
    }

    /// Preconfigured source: reader tag and media reference already known, no
    /// probing scheduled. Duplication uses this form.
    pub fn spawn_with_reference(
        name: &str,
        reader: &str,
        media_reference: MediaReference,
        uuid: Option<Uuid>,
        services: Arc<MediaServices>,
        config: SourceConfig,
    ) -> UuidSource {
        let mut base = MediaSourceBase::new(name, media_reference);
        if let Some(uuid) = uuid {
            base.set_uuid(uuid);
        }
        base.set_reader(reader);
        base.media_reference_mut().set_timecode_from_frames();
        Self::spawn_parts(base, Value::Null, Vec::new(), services, config, None)
    }

    /// Rehydrate a serialised source: base record, metadata tree and stream
    /// actors. Streams that fail to rehydrate are skipped with a warning.
    pub fn spawn_from_json(
        jsn: &Value,
        services: Arc<MediaServices>,
        config: SourceConfig,
    ) -> Result<UuidSource, MediaError> {
        let base = MediaSourceBase::from_json(
            jsn.get("base")
                .ok_or_else(|| MediaError::generic("media source json has no base"))?,
        )?;
        let store_tree = jsn.get("store").cloned().unwrap_or(Value::Null);
        let mut streams = Vec::new();
        if let Some(actors) = jsn.get("actors").and_then(Value::as_object) {
            for (key, value) in actors {
                if value.pointer("/base/type").and_then(Value::as_str) != Some("MediaStream") {
                    continue;
                }
                match MediaStreamActor::spawn_from_json(value) {
                    Ok(entry) => streams.push(entry),
                    Err(err) => {
                        warn!(stream = key.as_str(), error = %err, "failed to rehydrate media stream")
                    }
                }
            }
        }
        Ok(Self::spawn_parts(
            base, store_tree, streams, services, config, None,
        ))
    }

    fn spawn_parts(
        base: MediaSourceBase,
        store_tree: Value,
        streams: Vec<UuidStream>,
        services: Arc<MediaServices>,
        config: SourceConfig,
        acquire_rate: Option<FrameRate>,
    ) -> UuidSource {
        let uuid = base.uuid();
        debug!(source = %uuid, name = base.name(), "media source created");

        let json_store = spawn_store(store_tree);
        let events = Arc::new(EventHub::new(config.event_capacity));
        let mut stream_map = HashMap::new();
        for entry in streams {
            stream_map.insert(entry.uuid, entry.stream);
        }
        let call_timeout = config.call_timeout;
        let actor = Self {
            base,
            streams: stream_map,
            json_store,
            events,
            services,
            config,
            parent: None,
        };
        let (source, _join) = spawn_actor(actor);

        let _ = source.cast(handlers::init::InitMessage);
        if let Some(rate) = acquire_rate {
            // Streams must be configured before anything else touches the
            // source; the reply is discarded like any other change broadcast.
            let acquire_ref = source.clone();
            dailies_runtime::spawn(async move {
                let _ = acquire_ref
                    .call(
                        handlers::acquire_detail::AcquireMediaDetailMessage { rate },
                        call_timeout,
                    )
                    .await;
            });
        }
        UuidSource { uuid, source }
    }

    pub(crate) fn emit_changed(&self) {
        self.events.emit(MediaEvent::Changed {
            uuid: self.base.uuid(),
        });
    }

    pub(crate) fn current_stream(&self, media_type: MediaType) -> Option<UuidStream> {
        let uuid = self.base.current(media_type)?;
        let stream = self.streams.get(&uuid)?.clone();
        Some(UuidStream { uuid, stream })
    }

    pub(crate) async fn current_stream_detail(
        &self,
        media_type: MediaType,
    ) -> Result<StreamDetail, MediaError> {
        let current = self
            .current_stream(media_type)
            .ok_or(MediaError::NoStreams)?;
        current
            .stream
            .call(GetStreamDetailMessage, self.config.call_timeout)
            .await
            .map_err(|err| MediaError::from_call_error("get_stream_detail", err))
    }

    /// Current colour-pipeline document, `None` when absent or unreadable.
    pub(crate) async fn colour_pipeline_json(&self) -> Option<Value> {
        self.store_get("/colour_pipeline").await.ok()
    }

    /// Assemble the descriptor for one logical frame of the current stream.
    /// Image requests attach the colour pipeline; its absence degrades to the
    /// empty document rather than failing the request.
    pub(crate) async fn resolve_single_frame(
        &self,
        media_type: MediaType,
        logical_frame: i64,
        me: Option<WeakSourceRef>,
    ) -> Result<AVFrameID, MediaError> {
        let current = self
            .base
            .current(media_type)
            .ok_or(MediaError::NoStreams)?;
        let detail = self.current_stream_detail(media_type).await?;
        let (uri, frame) = self.base.media_reference().uri(logical_frame)?;
        let (colour, current_stream) = if media_type == MediaType::Image {
            match self.colour_pipeline_json().await {
                Some(meta) => (meta, Some(current)),
                None => (Value::Null, None),
            }
        } else {
            (Value::Null, Some(current))
        };
        Ok(self.build_frame_id(uri, frame, media_type, &detail, colour, current_stream, me))
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn build_frame_id(
        &self,
        uri: Url,
        frame: i64,
        media_type: MediaType,
        detail: &StreamDetail,
        colour: Value,
        current_stream: Option<Uuid>,
        me: Option<WeakSourceRef>,
    ) -> AVFrameID {
        let first_frame = self.base.media_reference().frame(0).unwrap_or(0);
        AVFrameID::new(
            uri,
            frame,
            first_frame,
            self.base.media_reference().rate(),
            detail,
            self.base.reader(),
            self.base.uuid(),
            me,
            colour,
            current_stream,
            self.parent,
            media_type,
        )
    }

    /// Cache keys for the requested logical frames; an empty request means
    /// every frame. Explicit requests keep positional semantics: failures
    /// become empty keys, never shorter vectors.
    pub(crate) async fn media_keys(
        &self,
        media_type: MediaType,
        logical_frames: &[i64],
    ) -> Result<Vec<MediaKey>, MediaError> {
        if self.base.empty() {
            if self.base.error_detail().is_empty() {
                return Err(MediaError::NoStreams);
            }
            return Err(MediaError::generic(self.base.error_detail()));
        }
        if self.base.current(media_type).is_none() {
            return Err(MediaError::NoStreams);
        }
        let detail = self.current_stream_detail(media_type).await?;
        let reference = self.base.media_reference();
        if logical_frames.is_empty() {
            return Ok(reference
                .uris()
                .into_iter()
                .map(|(uri, frame)| MediaKey::new(&detail.key_format, &uri, frame, &detail.name))
                .collect());
        }
        Ok(logical_frames
            .iter()
            .map(|&logical| match reference.uri(logical) {
                Ok((uri, frame)) => MediaKey::new(&detail.key_format, &uri, frame, &detail.name),
                Err(_) => MediaKey::default(),
            })
            .collect())
    }

    /// Probe metadata for this source and store it under
    /// `/metadata/media/@<frame>` (sequence) or `/metadata/media/@`
    /// (container). Sequences probe the first file frame only: probing every
    /// frame of a large sequence would stall the system.
    pub(crate) async fn probe_metadata(&mut self) -> Result<bool, MediaError> {
        let Some(probe) = self.services.metadata.clone() else {
            return Ok(false);
        };
        let reference = self.base.media_reference().clone();
        let (uri, file_frame, path) = if reference.container() {
            (
                reference.base_uri().clone(),
                None,
                "/metadata/media/@".to_string(),
            )
        } else {
            let (uri, file_frame) = reference.uri(0).map_err(|_| MediaError::Metadata {
                reason: format!("sequence with no frames {}", reference.base_uri()),
            })?;
            (uri, Some(file_frame), format!("/metadata/media/@{file_frame}"))
        };
        let metadata = probe
            .probe(&uri, file_frame)
            .await
            .map_err(|reason| MediaError::Metadata { reason })?;
        self.store_set(metadata.clone(), path).await?;
        self.events.emit(MediaEvent::Metadata {
            uuid: self.base.uuid(),
            metadata,
        });
        Ok(true)
    }

    /// Run the post-probe enrichment hook; its result is merged into the
    /// metadata store. An absent hook is `false`, not an error.
    pub(crate) async fn apply_media_hook(&mut self) -> Result<bool, MediaError> {
        let Some(hook) = self.services.hook.clone() else {
            return Ok(false);
        };
        let metadata = self.store_get("").await.unwrap_or(Value::Null);
        match hook.enrich(self.base.media_reference(), &metadata).await {
            Ok(Some(extra)) => {
                self.store_merge(extra, "").await?;
                self.emit_changed();
                Ok(true)
            }
            Ok(None) => Ok(true),
            Err(reason) => Err(MediaError::generic(reason)),
        }
    }

    pub(crate) async fn store_get(&self, path: impl Into<String>) -> Result<Value, MediaError> {
        self.json_store
            .call(
                GetJsonMessage { path: path.into() },
                self.config.call_timeout,
            )
            .await
            .map_err(|err| MediaError::from_call_error("json_store_get", err))?
    }

    pub(crate) async fn store_set(
        &self,
        value: Value,
        path: impl Into<String>,
    ) -> Result<bool, MediaError> {
        self.json_store
            .call(
                SetJsonMessage {
                    value,
                    path: path.into(),
                },
                self.config.call_timeout,
            )
            .await
            .map_err(|err| MediaError::from_call_error("json_store_set", err))
    }

    pub(crate) async fn store_merge(
        &self,
        value: Value,
        path: impl Into<String>,
    ) -> Result<bool, MediaError> {
        self.json_store
            .call(
                MergeJsonMessage {
                    value,
                    path: path.into(),
                },
                self.config.call_timeout,
            )
            .await
            .map_err(|err| MediaError::from_call_error("json_store_merge", err))
    }
}

impl Drop for MediaSourceActor {
    fn drop(&mut self) {
        debug!(source = %self.base.uuid(), name = self.base.name(), "media source exited");
    }
}
