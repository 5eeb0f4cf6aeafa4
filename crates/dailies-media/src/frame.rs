use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;
use url::Url;
use uuid::Uuid;

use dailies_core::{FrameRate, MediaKey, MediaType, StreamDetail};

use crate::source::WeakSourceRef;

/// Decode-ready descriptor of one frame. Immutable once assembled; consumers
/// keep using it even after the source that built it is gone, which is why
/// the source back-reference is weak.
#[derive(Clone)]
pub struct AVFrameID {
    pub uri: Url,
    /// File frame: the integer in a sequence filename, or a container offset.
    pub frame: i64,
    /// File frame of logical frame 0, invariant within a source. Lets
    /// consumers compute frame offsets without reconsulting the source.
    pub first_frame: i64,
    pub rate: FrameRate,
    pub stream_name: String,
    pub key_format: String,
    pub key: MediaKey,
    pub reader: String,
    pub source_uuid: Uuid,
    pub source: Option<WeakSourceRef>,
    /// Colour-pipeline configuration, `Value::Null` when absent. Image only;
    /// audio descriptors always carry the empty document.
    pub colour_pipeline: Value,
    pub current_stream: Option<Uuid>,
    pub parent_uuid: Option<Uuid>,
    pub media_type: MediaType,
}

fn blank_uri() -> &'static Url {
    static BLANK: OnceLock<Url> = OnceLock::new();
    BLANK.get_or_init(|| Url::parse("about:blank").expect("blank frame uri"))
}

impl AVFrameID {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uri: Url,
        frame: i64,
        first_frame: i64,
        rate: FrameRate,
        detail: &StreamDetail,
        reader: impl Into<String>,
        source_uuid: Uuid,
        source: Option<WeakSourceRef>,
        colour_pipeline: Value,
        current_stream: Option<Uuid>,
        parent_uuid: Option<Uuid>,
        media_type: MediaType,
    ) -> Self {
        let key = MediaKey::new(&detail.key_format, &uri, frame, &detail.name);
        Self {
            uri,
            frame,
            first_frame,
            rate,
            stream_name: detail.name.clone(),
            key_format: detail.key_format.clone(),
            key,
            reader: reader.into(),
            source_uuid,
            source,
            colour_pipeline,
            current_stream,
            parent_uuid,
            media_type,
        }
    }

    /// The blank sentinel: "no frame here" without failing a batch. Keeps
    /// audio-less sources and sparse ranges playable.
    pub fn blank(media_type: MediaType) -> Self {
        Self {
            uri: blank_uri().clone(),
            frame: 0,
            first_frame: 0,
            rate: FrameRate::ZERO,
            stream_name: String::new(),
            key_format: String::new(),
            key: MediaKey::default(),
            reader: String::new(),
            source_uuid: Uuid::nil(),
            source: None,
            colour_pipeline: Value::Null,
            current_stream: None,
            parent_uuid: None,
            media_type,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Debug for AVFrameID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AVFrameID")
            .field("uri", &self.uri.as_str())
            .field("frame", &self.frame)
            .field("first_frame", &self.first_frame)
            .field("rate", &self.rate)
            .field("stream_name", &self.stream_name)
            .field("key", &self.key)
            .field("reader", &self.reader)
            .field("source_uuid", &self.source_uuid)
            .field("media_type", &self.media_type)
            .finish()
    }
}

impl PartialEq for AVFrameID {
    fn eq(&self, other: &Self) -> bool {
        // The weak source handle is identity the uuid already carries.
        self.uri == other.uri
            && self.frame == other.frame
            && self.first_frame == other.first_frame
            && self.rate == other.rate
            && self.stream_name == other.stream_name
            && self.key_format == other.key_format
            && self.key == other.key
            && self.reader == other.reader
            && self.source_uuid == other.source_uuid
            && self.colour_pipeline == other.colour_pipeline
            && self.current_stream == other.current_stream
            && self.parent_uuid == other.parent_uuid
            && self.media_type == other.media_type
    }
}
