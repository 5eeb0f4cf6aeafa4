use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;
use uuid::Uuid;

use dailies_core::{
    FrameList, FrameRate, FrameRateDuration, MediaDetail, MediaError, MediaKey, MediaReference,
    MediaStatus, MediaType, StreamDetail,
};

use crate::config::SourceConfig;
use crate::events::MediaEvent;
use crate::services::{
    FrameCache, MediaDetailReader, MediaHook, MediaServices, MetadataProbe, ThumbnailBuffer,
    ThumbnailRenderer,
};
use crate::source::handlers::acquire_detail::AcquireMediaDetailMessage;
use crate::source::handlers::cache_keys::MediaKeysMessage;
use crate::source::handlers::current_stream::SetCurrentMediaStreamMessage;
use crate::source::handlers::duplicate::DuplicateMessage;
use crate::source::handlers::frame_pointer::GetFramePointerMessage;
use crate::source::handlers::frame_pointers::{
    GetAllFramePointersMessage, GetFramePointersMessage,
};
use crate::source::handlers::invalidate_cache::InvalidateCacheMessage;
use crate::source::handlers::json::JsonGetMessage;
use crate::source::handlers::media_details::{GetMediaDetailsMessage, UiEvent};
use crate::source::handlers::media_hook::GetMediaHookMessage;
use crate::source::handlers::media_reference::MediaReferenceGetMessage;
use crate::source::handlers::serialise::SerialiseMessage;
use crate::source::handlers::status::StatusSetMessage;
use crate::source::handlers::streams::GetMediaStreamsMessage;
use crate::source::handlers::subscribe::SubscribeMessage;
use crate::source::handlers::thumbnail::GetThumbnailMessage;
use crate::source::{MediaSourceActor, UuidSource};

const TEST_TIMEOUT: Duration = Duration::from_secs(10);

fn fps24() -> FrameRate {
    FrameRate::new(24, 1)
}

/// Reader stub: hands back a canned probe result and counts probes.
struct StubReader {
    detail: MediaDetail,
    probes: AtomicUsize,
}

impl StubReader {
    fn new(detail: MediaDetail) -> Arc<Self> {
        Arc::new(Self {
            detail,
            probes: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl MediaDetailReader for StubReader {
    async fn probe(&self, _uri: &Url) -> Result<MediaDetail, String> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        Ok(self.detail.clone())
    }
}

struct FailingReader;

#[async_trait]
impl MediaDetailReader for FailingReader {
    async fn probe(&self, uri: &Url) -> Result<MediaDetail, String> {
        Err(format!("unreadable container {uri}"))
    }
}

struct StubMetadata;

#[async_trait]
impl MetadataProbe for StubMetadata {
    async fn probe(&self, _uri: &Url, file_frame: Option<i64>) -> Result<Value, String> {
        Ok(json!({"codec": "exr", "file_frame": file_frame}))
    }
}

struct StubHook {
    extra: Value,
}

#[async_trait]
impl MediaHook for StubHook {
    async fn enrich(
        &self,
        _reference: &MediaReference,
        _metadata: &Value,
    ) -> Result<Option<Value>, String> {
        Ok(Some(self.extra.clone()))
    }
}

/// Cache stub: erase removes and reports the keys it actually held.
#[derive(Default)]
struct StubCache {
    stored: Mutex<HashSet<MediaKey>>,
}

#[async_trait]
impl FrameCache for StubCache {
    async fn erase(&self, keys: &[MediaKey]) -> Result<Vec<MediaKey>, String> {
        let mut stored = self.stored.lock().expect("cache lock");
        Ok(keys
            .iter()
            .filter(|key| stored.remove(*key))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct StubThumbnails {
    cancelled: Mutex<Vec<Uuid>>,
}

#[async_trait]
impl ThumbnailRenderer for StubThumbnails {
    async fn render(&self, frame: crate::frame::AVFrameID, _job: Uuid) -> Result<ThumbnailBuffer, String> {
        if frame.is_blank() {
            return Err("blank frame".to_string());
        }
        Ok(ThumbnailBuffer {
            width: 2,
            height: 2,
            data: vec![0; 16],
        })
    }

    fn cancel(&self, job: Uuid) {
        self.cancelled.lock().expect("cancel lock").push(job);
    }
}

/// Probe result of a typical movie container: one video and one audio track,
/// duration known.
fn movie_detail() -> MediaDetail {
    MediaDetail {
        reader: "ffmpeg".to_string(),
        timecode: Default::default(),
        streams: vec![
            StreamDetail::new(
                "video",
                FrameRateDuration::new(48, fps24()),
                MediaType::Image,
                "",
            ),
            StreamDetail::new(
                "audio",
                FrameRateDuration::new(48, fps24()),
                MediaType::Audio,
                "",
            ),
        ],
    }
}

/// Probe result of an EXR-style sequence: per-frame probing cannot see the
/// overall duration or rate, and there are two audio sidecar tracks.
fn sequence_detail() -> MediaDetail {
    MediaDetail {
        reader: "exr".to_string(),
        timecode: Default::default(),
        streams: vec![
            StreamDetail::new("rgba", FrameRateDuration::default(), MediaType::Image, ""),
            StreamDetail::new("mix", FrameRateDuration::default(), MediaType::Audio, ""),
            StreamDetail::new("dialogue", FrameRateDuration::default(), MediaType::Audio, ""),
        ],
    }
}

fn reader_services(reader: Arc<dyn MediaDetailReader>) -> Arc<MediaServices> {
    Arc::new(MediaServices {
        reader: Some(reader),
        ..MediaServices::default()
    })
}

fn spawn_movie(services: Arc<MediaServices>) -> UuidSource {
    MediaSourceActor::spawn_container(
        "clip",
        Url::parse("file:///m.mov").expect("uri"),
        fps24(),
        None,
        services,
        SourceConfig::default(),
    )
}

fn spawn_exr_sequence(services: Arc<MediaServices>) -> UuidSource {
    MediaSourceActor::spawn_sequence(
        "seq",
        Url::parse("file:///s.%04d.exr").expect("uri"),
        FrameList::from_range(1001, 1005),
        fps24(),
        None,
        services,
        SourceConfig::default(),
    )
}

async fn acquire(source: &UuidSource) -> bool {
    source
        .source
        .call(AcquireMediaDetailMessage { rate: fps24() }, TEST_TIMEOUT)
        .await
        .expect("call acquire detail")
}

async fn media_reference(source: &UuidSource) -> MediaReference {
    source
        .source
        .call(MediaReferenceGetMessage, TEST_TIMEOUT)
        .await
        .expect("call media reference")
}

#[test]
fn s1_container_movie_resolves_frame_zero() {
    dailies_runtime::block_on(async {
        let source = spawn_movie(reader_services(StubReader::new(movie_detail())));
        assert!(acquire(&source).await);

        let reference = media_reference(&source).await;
        assert!(reference.container());
        assert_eq!(reference.frame_count(), 48);
        assert!(reference.frame_list().is_empty());

        let frame = source
            .source
            .call(
                GetFramePointerMessage {
                    media_type: MediaType::Image,
                    logical_frame: 0,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointer")
            .expect("frame pointer");
        assert_eq!(frame.frame, 0);
        assert_eq!(frame.first_frame, 0);
        assert_eq!(frame.reader, "ffmpeg");
        assert_eq!(frame.source_uuid, source.uuid);
        assert!(!frame.is_blank());
    });
}

#[test]
fn s2_sequence_with_offset_anchors_timecode_on_file_frames() {
    dailies_runtime::block_on(async {
        let source = spawn_exr_sequence(reader_services(StubReader::new(sequence_detail())));
        assert!(acquire(&source).await);

        let reference = media_reference(&source).await;
        assert!(!reference.container());
        assert_eq!(reference.frame_count(), 5);
        assert_eq!(reference.timecode().total_frames(), 1001);

        let first = source
            .source
            .call(
                GetFramePointerMessage {
                    media_type: MediaType::Image,
                    logical_frame: 0,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointer")
            .expect("frame pointer");
        assert_eq!(first.frame, 1001);
        assert_eq!(first.first_frame, 1001);
        assert_eq!(first.uri.as_str(), "file:///s.1001.exr");

        let last = source
            .source
            .call(
                GetFramePointerMessage {
                    media_type: MediaType::Image,
                    logical_frame: 4,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointer")
            .expect("frame pointer");
        assert_eq!(last.frame, 1005);
        assert_eq!(last.first_frame, 1001);
    });
}

#[test]
fn s3_out_of_range_single_frame_is_rejected() {
    dailies_runtime::block_on(async {
        let source = spawn_exr_sequence(reader_services(StubReader::new(sequence_detail())));
        assert!(acquire(&source).await);

        let err = source
            .source
            .call(
                GetFramePointerMessage {
                    media_type: MediaType::Image,
                    logical_frame: 999_999,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointer")
            .expect_err("out of range must fail");
        assert_eq!(err, MediaError::InvalidFrameIndex { frame: 999_999 });
    });
}

#[test]
fn s4_sparse_range_pads_with_blank_sentinels() {
    dailies_runtime::block_on(async {
        let source = spawn_exr_sequence(reader_services(StubReader::new(sequence_detail())));
        assert!(acquire(&source).await);

        let frames = source
            .source
            .call(
                GetFramePointersMessage {
                    media_type: MediaType::Image,
                    ranges: vec![(3, 7)],
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointers")
            .expect("frame pointers");
        assert_eq!(frames.len(), 5);
        assert!(!frames[0].is_blank());
        assert!(!frames[1].is_blank());
        assert_eq!(frames[0].frame, 1004);
        assert_eq!(frames[1].frame, 1005);
        for blank in &frames[2..] {
            assert!(blank.is_blank());
        }
    });
}

#[test]
fn s5_invalidate_cache_erases_known_keys() {
    dailies_runtime::block_on(async {
        let cache = Arc::new(StubCache::default());
        let services = Arc::new(MediaServices {
            reader: Some(StubReader::new(sequence_detail())),
            image_cache: Some(cache.clone()),
            ..MediaServices::default()
        });
        let source = spawn_exr_sequence(services);
        assert!(acquire(&source).await);

        let seeded = source
            .source
            .call(
                MediaKeysMessage {
                    media_type: MediaType::Image,
                    logical_frames: vec![0, 1, 2],
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call media keys")
            .expect("media keys");
        assert_eq!(seeded.len(), 3);
        cache
            .stored
            .lock()
            .expect("cache lock")
            .extend(seeded.iter().cloned());

        let erased = source
            .source
            .call(InvalidateCacheMessage, TEST_TIMEOUT)
            .await
            .expect("call invalidate cache")
            .expect("invalidate cache");
        for key in &seeded {
            assert!(erased.contains(key), "seeded key not erased: {key:?}");
        }
    });
}

#[test]
fn s6_duplicate_diverges_only_in_identity_and_selection() {
    dailies_runtime::block_on(async {
        let source = spawn_exr_sequence(reader_services(StubReader::new(sequence_detail())));
        assert!(acquire(&source).await);

        let duplicate = source
            .source
            .call(DuplicateMessage, TEST_TIMEOUT)
            .await
            .expect("call duplicate")
            .expect("duplicate");
        assert_ne!(duplicate.uuid, source.uuid);

        // Repoint the duplicate's audio selection at its second audio stream.
        let duplicate_audio = duplicate
            .source
            .call(
                GetMediaStreamsMessage {
                    media_type: MediaType::Audio,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call get streams");
        assert_eq!(duplicate_audio.len(), 2);
        assert!(
            duplicate
                .source
                .call(
                    SetCurrentMediaStreamMessage {
                        media_type: MediaType::Audio,
                        uuid: duplicate_audio[1].uuid,
                    },
                    TEST_TIMEOUT,
                )
                .await
                .expect("call set current stream")
        );

        let original_blob = source
            .source
            .call(SerialiseMessage, TEST_TIMEOUT)
            .await
            .expect("call serialise")
            .expect("serialise");
        let duplicate_blob = duplicate
            .source
            .call(SerialiseMessage, TEST_TIMEOUT)
            .await
            .expect("call serialise")
            .expect("serialise");

        // Identical everywhere but identity and the audio selection.
        assert_eq!(original_blob["store"], duplicate_blob["store"]);
        assert_eq!(
            original_blob["base"]["media_reference"],
            duplicate_blob["base"]["media_reference"]
        );
        assert_eq!(original_blob["base"]["reader"], duplicate_blob["base"]["reader"]);
        assert_ne!(original_blob["base"]["uuid"], duplicate_blob["base"]["uuid"]);

        let original_streams = original_blob["actors"].as_object().expect("actors");
        let duplicate_streams = duplicate_blob["actors"].as_object().expect("actors");
        assert_eq!(original_streams.len(), duplicate_streams.len());
        assert!(
            original_streams
                .keys()
                .all(|uuid| !duplicate_streams.contains_key(uuid))
        );

        // Image selection matches by position, audio was repointed.
        let image_position = |blob: &Value| -> usize {
            let current = blob["base"]["current_image_stream"]
                .as_str()
                .expect("current image stream")
                .to_string();
            blob["base"]["image_streams"]
                .as_array()
                .expect("image streams")
                .iter()
                .position(|uuid| uuid.as_str() == Some(current.as_str()))
                .expect("current image stream position")
        };
        assert_eq!(image_position(&original_blob), image_position(&duplicate_blob));
        assert_eq!(
            duplicate_blob["base"]["current_audio_stream"].as_str(),
            Some(duplicate_audio[1].uuid.to_string().as_str())
        );
        assert_ne!(
            original_blob["base"]["current_audio_stream"],
            duplicate_blob["base"]["current_audio_stream"]
        );
    });
}

#[test]
fn whole_source_batch_is_complete_ordered_and_real() {
    dailies_runtime::block_on(async {
        let source = spawn_exr_sequence(reader_services(StubReader::new(sequence_detail())));
        assert!(acquire(&source).await);

        let reference = media_reference(&source).await;
        let frames = source
            .source
            .call(
                GetAllFramePointersMessage {
                    media_type: MediaType::Image,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call all frame pointers")
            .expect("all frame pointers");
        assert_eq!(frames.len(), reference.frame_count() as usize);
        for (logical, frame) in frames.iter().enumerate() {
            assert!(!frame.is_blank());
            let (uri, file_frame) = reference.uri(logical as i64).expect("in range");
            assert_eq!(frame.uri, uri);
            assert_eq!(frame.frame, file_frame);
        }
    });
}

#[test]
fn ranges_without_an_audio_stream_stay_playable_as_blanks() {
    dailies_runtime::block_on(async {
        // A movie whose probe finds no audio track at all.
        let mut detail = movie_detail();
        detail.streams.retain(|stream| stream.media_type == MediaType::Image);
        let source = spawn_movie(reader_services(StubReader::new(detail)));
        assert!(acquire(&source).await);

        let frames = source
            .source
            .call(
                GetFramePointersMessage {
                    media_type: MediaType::Audio,
                    ranges: vec![(0, 9), (20, 24)],
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointers")
            .expect("frame pointers");
        assert_eq!(frames.len(), 15);
        assert!(frames.iter().all(|frame| frame.is_blank()));
    });
}

#[test]
fn acquire_detail_is_idempotent() {
    dailies_runtime::block_on(async {
        let reader = StubReader::new(movie_detail());
        let source = spawn_movie(reader_services(reader.clone()));
        assert!(acquire(&source).await);

        let before: Vec<Uuid> = source
            .source
            .call(
                GetMediaStreamsMessage {
                    media_type: MediaType::Image,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call get streams")
            .into_iter()
            .map(|entry| entry.uuid)
            .collect();

        assert!(acquire(&source).await);
        let after: Vec<Uuid> = source
            .source
            .call(
                GetMediaStreamsMessage {
                    media_type: MediaType::Image,
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call get streams")
            .into_iter()
            .map(|entry| entry.uuid)
            .collect();

        assert_eq!(before, after);
        assert_eq!(reader.probes.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn serialise_round_trips_into_an_equivalent_source() {
    dailies_runtime::block_on(async {
        let services = Arc::new(MediaServices {
            reader: Some(StubReader::new(sequence_detail())),
            metadata: Some(Arc::new(StubMetadata)),
            ..MediaServices::default()
        });
        let source = spawn_exr_sequence(services.clone());
        assert!(acquire(&source).await);

        let blob = source
            .source
            .call(SerialiseMessage, TEST_TIMEOUT)
            .await
            .expect("call serialise")
            .expect("serialise");

        let rehydrated =
            MediaSourceActor::spawn_from_json(&blob, services, SourceConfig::default())
                .expect("rehydrate source");
        assert_eq!(rehydrated.uuid, source.uuid);

        let blob_again = rehydrated
            .source
            .call(SerialiseMessage, TEST_TIMEOUT)
            .await
            .expect("call serialise")
            .expect("serialise");
        assert_eq!(blob, blob_again);
    });
}

#[test]
fn cache_keys_are_deterministic_and_positional() {
    dailies_runtime::block_on(async {
        let source = spawn_exr_sequence(reader_services(StubReader::new(sequence_detail())));
        assert!(acquire(&source).await);

        let all = source
            .source
            .call(
                MediaKeysMessage {
                    media_type: MediaType::Image,
                    logical_frames: Vec::new(),
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call media keys")
            .expect("media keys");
        let again = source
            .source
            .call(
                MediaKeysMessage {
                    media_type: MediaType::Image,
                    logical_frames: Vec::new(),
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call media keys")
            .expect("media keys");
        assert_eq!(all, again);
        assert_eq!(all.len(), 5);

        // Positional semantics: failures become empty keys, never holes.
        let sparse = source
            .source
            .call(
                MediaKeysMessage {
                    media_type: MediaType::Image,
                    logical_frames: vec![0, 99, 4],
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call media keys")
            .expect("media keys");
        assert_eq!(sparse.len(), 3);
        assert!(!sparse[0].is_empty());
        assert!(sparse[1].is_empty());
        assert!(!sparse[2].is_empty());
    });
}

#[test]
fn reader_failure_is_recorded_and_surfaces_on_frame_requests() {
    dailies_runtime::block_on(async {
        let source = spawn_movie(reader_services(Arc::new(FailingReader)));
        assert!(!acquire(&source).await);

        let err = source
            .source
            .call(
                GetFramePointersMessage {
                    media_type: MediaType::Image,
                    ranges: vec![(0, 3)],
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call frame pointers")
            .expect_err("failed source must refuse batches");
        assert!(err.to_string().contains("unreadable container"));
    });
}

#[test]
fn offline_sources_refuse_detail_acquisition() {
    dailies_runtime::block_on(async {
        let source = MediaSourceActor::spawn_with_reference(
            "offline",
            "ffmpeg",
            MediaReference::new_container(Url::parse("file:///gone.mov").expect("uri")),
            None,
            reader_services(StubReader::new(movie_detail())),
            SourceConfig::default(),
        );
        assert!(
            source
                .source
                .call(
                    StatusSetMessage {
                        status: MediaStatus::Missing,
                    },
                    TEST_TIMEOUT,
                )
                .await
                .expect("call status set")
        );
        assert!(!acquire(&source).await);
    });
}

#[test]
fn status_changes_broadcast_to_subscribers() {
    dailies_runtime::block_on(async {
        let source = MediaSourceActor::spawn_with_reference(
            "quiet",
            "ffmpeg",
            MediaReference::new_container(Url::parse("file:///m.mov").expect("uri")),
            None,
            Arc::new(MediaServices::default()),
            SourceConfig::default(),
        );
        let mut events = source
            .source
            .call(SubscribeMessage, TEST_TIMEOUT)
            .await
            .expect("call subscribe");

        assert!(
            source
                .source
                .call(
                    StatusSetMessage {
                        status: MediaStatus::Corrupt,
                    },
                    TEST_TIMEOUT,
                )
                .await
                .expect("call status set")
        );

        let event = tokio::time::timeout(TEST_TIMEOUT, events.recv())
            .await
            .expect("event timeout")
            .expect("event stream open");
        assert!(matches!(event, MediaEvent::Changed { uuid } if uuid == source.uuid));
    });
}

#[test]
fn media_hook_enrichment_lands_in_the_store() {
    dailies_runtime::block_on(async {
        let services = Arc::new(MediaServices {
            reader: Some(StubReader::new(movie_detail())),
            hook: Some(Arc::new(StubHook {
                extra: json!({"vendor": {"lut": "show.cube"}}),
            })),
            ..MediaServices::default()
        });
        let source = spawn_movie(services);
        assert!(acquire(&source).await);

        let done = source
            .source
            .call(GetMediaHookMessage, TEST_TIMEOUT)
            .await
            .expect("call media hook")
            .expect("media hook");
        assert!(done);

        let lut = source
            .source
            .call(
                JsonGetMessage {
                    path: "/vendor/lut".to_string(),
                },
                TEST_TIMEOUT,
            )
            .await
            .expect("call json get")
            .expect("json get");
        assert_eq!(lut, json!("show.cube"));
    });
}

#[test]
fn thumbnails_are_rendered_and_pushed_to_the_requester() {
    dailies_runtime::block_on(async {
        let thumbnails = Arc::new(StubThumbnails::default());
        let services = Arc::new(MediaServices {
            reader: Some(StubReader::new(sequence_detail())),
            thumbnails: Some(thumbnails),
            ..MediaServices::default()
        });
        let source = spawn_exr_sequence(services);
        assert!(acquire(&source).await);

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let job = Uuid::new_v4();
        source
            .source
            .cast(GetThumbnailMessage {
                position: 0.5,
                job,
                requester: tx,
            })
            .expect("cast get thumbnail");

        let reply = tokio::time::timeout(TEST_TIMEOUT, rx.recv())
            .await
            .expect("thumbnail timeout")
            .expect("thumbnail channel open");
        assert_eq!(reply.job, job);
        assert!(reply.error.is_empty());
        let buffer = reply.buffer.expect("thumbnail buffer");
        assert_eq!((buffer.width, buffer.height), (2, 2));
    });
}

#[test]
fn media_details_push_metadata_and_hash_padded_paths() {
    dailies_runtime::block_on(async {
        let services = Arc::new(MediaServices {
            reader: Some(StubReader::new(sequence_detail())),
            metadata: Some(Arc::new(StubMetadata)),
            ..MediaServices::default()
        });
        let source = spawn_exr_sequence(services);
        assert!(acquire(&source).await);

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        source
            .source
            .cast(GetMediaDetailsMessage { ui: tx })
            .expect("cast get media details");

        let first = tokio::time::timeout(TEST_TIMEOUT, rx.recv())
            .await
            .expect("ui timeout")
            .expect("ui channel open");
        let UiEvent::SourceMetadata { metadata } = first else {
            panic!("expected source metadata first");
        };
        assert!(metadata.get("@1001").is_some());

        let second = tokio::time::timeout(TEST_TIMEOUT, rx.recv())
            .await
            .expect("ui timeout")
            .expect("ui channel open");
        let UiEvent::StreamDetails(payload) = second else {
            panic!("expected stream details second");
        };
        assert_eq!(payload.display_path, "/s.####.exr");
        assert_eq!(payload.fps_text, "24.0");
        assert_eq!(payload.current_detail.name, "rgba");
        assert_eq!(payload.image_streams.len(), 1);
        assert_eq!(
            payload.current_image_stream,
            Some(payload.image_streams[0].uuid)
        );
    });
}
