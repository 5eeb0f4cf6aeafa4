//! Interfaces of the process-wide collaborators a source talks to. The core
//! never owns these; it holds an explicit [`MediaServices`] context passed at
//! construction. An absent entry behaves like an absent registry entry:
//! detail acquisition reports failure, the hook reports `false`, cache
//! invalidation returns nothing.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use dailies_core::{MediaDetail, MediaKey, MediaReference};

use crate::frame::AVFrameID;
use crate::source::SourceRef;

/// The reader registry: probes technical detail (reader tag, timecode,
/// per-stream format) for the asset behind a URI.
#[async_trait]
pub trait MediaDetailReader: Send + Sync {
    async fn probe(&self, uri: &Url) -> Result<MediaDetail, String>;
}

/// The metadata plugin: probes a JSON document for one file. `file_frame` is
/// set for sequence frames and `None` for containers.
#[async_trait]
pub trait MetadataProbe: Send + Sync {
    async fn probe(&self, uri: &Url, file_frame: Option<i64>) -> Result<Value, String>;
}

/// Post-probe enrichment hook. Returns a document to merge into the source's
/// metadata store, or `None` when it has nothing to add. Data-in/data-out:
/// a hook must not call back into the source it is enriching.
#[async_trait]
pub trait MediaHook: Send + Sync {
    async fn enrich(
        &self,
        reference: &MediaReference,
        metadata: &Value,
    ) -> Result<Option<Value>, String>;
}

/// An image or audio frame cache. `erase` returns the keys actually removed.
#[async_trait]
pub trait FrameCache: Send + Sync {
    async fn erase(&self, keys: &[MediaKey]) -> Result<Vec<MediaKey>, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Pushed to a thumbnail requester when the render resolves. `error` is empty
/// on success.
#[derive(Clone)]
pub struct ThumbnailReply {
    pub buffer: Option<Arc<ThumbnailBuffer>>,
    pub position: f32,
    pub job: Uuid,
    pub error: String,
}

#[async_trait]
pub trait ThumbnailRenderer: Send + Sync {
    async fn render(&self, frame: AVFrameID, job: Uuid) -> Result<ThumbnailBuffer, String>;
    /// Cancel a render by job uuid; unknown jobs are ignored.
    fn cancel(&self, job: Uuid);
}

/// Availability scanner. `schedule` queues a reachability check; the outcome
/// comes back to the source as a status-set message.
pub trait MediaScanner: Send + Sync {
    fn schedule(&self, reference: MediaReference, source: SourceRef);
}

/// The explicit runtime context handed to every source at construction.
#[derive(Default, Clone)]
pub struct MediaServices {
    pub reader: Option<Arc<dyn MediaDetailReader>>,
    pub metadata: Option<Arc<dyn MetadataProbe>>,
    pub hook: Option<Arc<dyn MediaHook>>,
    pub image_cache: Option<Arc<dyn FrameCache>>,
    pub audio_cache: Option<Arc<dyn FrameCache>>,
    pub thumbnails: Option<Arc<dyn ThumbnailRenderer>>,
    pub scanner: Option<Arc<dyn MediaScanner>>,
}
