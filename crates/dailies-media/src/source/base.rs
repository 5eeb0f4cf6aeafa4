use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use dailies_core::{MediaError, MediaReference, MediaStatus, MediaType};

/// Persisted state record of a media source: everything that survives a
/// serialise/rehydrate round trip apart from the stream actors themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSourceBase {
    uuid: Uuid,
    name: String,
    media_reference: MediaReference,
    reader: String,
    status: MediaStatus,
    error_detail: String,
    current_image_stream: Option<Uuid>,
    current_audio_stream: Option<Uuid>,
    image_streams: Vec<Uuid>,
    audio_streams: Vec<Uuid>,
}

impl MediaSourceBase {
    pub fn new(name: impl Into<String>, media_reference: MediaReference) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            media_reference,
            reader: String::new(),
            status: MediaStatus::default(),
            error_detail: String::new(),
            current_image_stream: None,
            current_audio_stream: None,
            image_streams: Vec::new(),
            audio_streams: Vec::new(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn set_uuid(&mut self, uuid: Uuid) {
        self.uuid = uuid;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn media_reference(&self) -> &MediaReference {
        &self.media_reference
    }

    pub fn media_reference_mut(&mut self) -> &mut MediaReference {
        &mut self.media_reference
    }

    pub fn set_media_reference(&mut self, media_reference: MediaReference) {
        self.media_reference = media_reference;
    }

    pub fn reader(&self) -> &str {
        &self.reader
    }

    pub fn set_reader(&mut self, reader: impl Into<String>) {
        self.reader = reader.into();
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }

    pub fn set_status(&mut self, status: MediaStatus) {
        self.status = status;
    }

    pub fn online(&self) -> bool {
        self.status == MediaStatus::Online
    }

    pub fn error_detail(&self) -> &str {
        &self.error_detail
    }

    pub fn set_error_detail(&mut self, error_detail: impl Into<String>) {
        self.error_detail = error_detail.into();
    }

    /// True while no streams are registered for any media type.
    pub fn empty(&self) -> bool {
        self.image_streams.is_empty() && self.audio_streams.is_empty()
    }

    pub fn current(&self, media_type: MediaType) -> Option<Uuid> {
        match media_type {
            MediaType::Image => self.current_image_stream,
            MediaType::Audio => self.current_audio_stream,
        }
    }

    /// Point the current-stream pointer at a known stream of that type.
    /// Returns whether the change was accepted.
    pub fn set_current(&mut self, media_type: MediaType, uuid: Uuid) -> bool {
        if !self.streams(media_type).contains(&uuid) {
            return false;
        }
        match media_type {
            MediaType::Image => self.current_image_stream = Some(uuid),
            MediaType::Audio => self.current_audio_stream = Some(uuid),
        }
        true
    }

    pub fn streams(&self, media_type: MediaType) -> &[Uuid] {
        match media_type {
            MediaType::Image => &self.image_streams,
            MediaType::Audio => &self.audio_streams,
        }
    }

    pub fn has_type(&self, media_type: MediaType) -> bool {
        !self.streams(media_type).is_empty()
    }

    /// Register a stream uuid; the first stream of a type becomes current.
    pub fn add_media_stream(&mut self, media_type: MediaType, uuid: Uuid) {
        match media_type {
            MediaType::Image => {
                self.image_streams.push(uuid);
                self.current_image_stream.get_or_insert(uuid);
            }
            MediaType::Audio => {
                self.audio_streams.push(uuid);
                self.current_audio_stream.get_or_insert(uuid);
            }
        }
    }

    /// Drop every stream registration and current pointer.
    pub fn clear_streams(&mut self) {
        self.image_streams.clear();
        self.audio_streams.clear();
        self.current_image_stream = None;
        self.current_audio_stream = None;
    }

    pub fn serialise(&self) -> Result<Value, MediaError> {
        serde_json::to_value(self)
            .map_err(|err| MediaError::generic(format!("serialise media source base: {err}")))
    }

    pub fn from_json(value: &Value) -> Result<Self, MediaError> {
        serde_json::from_value(value.clone())
            .map_err(|err| MediaError::generic(format!("bad media source base: {err}")))
    }
}
