use serde::{Deserialize, Serialize};

use crate::rate::FrameRateDuration;
use crate::timecode::Timecode;

/// The two stream flavours a source can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MediaType {
    #[default]
    Image,
    Audio,
}

/// Reachability of the backing files. A source is usable only while online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MediaStatus {
    #[default]
    Online,
    Missing,
    Corrupt,
    Unreadable,
}

/// Per-stream technical detail: the stream-actor reply, and the per-stream
/// record inside a reader probe result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreamDetail {
    pub name: String,
    pub duration: FrameRateDuration,
    pub media_type: MediaType,
    pub key_format: String,
}

impl StreamDetail {
    pub fn new(
        name: impl Into<String>,
        duration: FrameRateDuration,
        media_type: MediaType,
        key_format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            media_type,
            key_format: key_format.into(),
        }
    }
}

/// Technical detail probed for a whole asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MediaDetail {
    /// Tag of the decoder plugin responsible for this asset.
    pub reader: String,
    pub timecode: Timecode,
    pub streams: Vec<StreamDetail>,
}
