use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;
use uuid::Uuid;

use dailies_core::{MediaReference, MediaType, StreamDetail};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::source::MediaSourceActor;
use crate::stream::UuidStream;

/// Everything a UI companion needs to render the stream selector in one
/// payload, so it can initialise without a round trip per field.
pub struct StreamDetailsPayload {
    pub uuid: Uuid,
    /// Display path: sequence pad tokens rewritten to `#`-padding.
    pub display_path: String,
    pub fps_text: String,
    pub fps: f64,
    pub current_detail: StreamDetail,
    pub image_streams: Vec<UuidStream>,
    pub current_image_stream: Option<Uuid>,
}

pub enum UiEvent {
    /// The `/metadata/media` subtree, or `Value::Null` when probing failed.
    SourceMetadata { metadata: Value },
    StreamDetails(Box<StreamDetailsPayload>),
}

/// Push source and stream details to a UI companion.
pub struct GetMediaDetailsMessage {
    pub ui: UnboundedSender<UiEvent>,
}

impl Message for GetMediaDetailsMessage {
    type Response = ();
}

#[async_trait::async_trait]
impl Handler<GetMediaDetailsMessage> for MediaSourceActor {
    async fn handle(&mut self, message: GetMediaDetailsMessage, _ctx: &mut ActorContext<Self>) {
        self.send_source_details(&message.ui).await;
        self.send_stream_details(&message.ui).await;
    }
}

impl MediaSourceActor {
    /// Current metadata subtree; when absent, force a probe and resend. A
    /// failed probe sends the empty document so the UI can settle.
    async fn send_source_details(&mut self, ui: &UnboundedSender<UiEvent>) {
        if let Ok(metadata) = self.store_get("/metadata/media").await {
            let _ = ui.send(UiEvent::SourceMetadata { metadata });
            return;
        }
        match self.probe_metadata().await {
            Ok(_) => {
                let metadata = self
                    .store_get("/metadata/media")
                    .await
                    .unwrap_or(Value::Null);
                let _ = ui.send(UiEvent::SourceMetadata { metadata });
            }
            Err(err) => {
                warn!(
                    source = %self.base.uuid(),
                    uri = %self.base.media_reference().base_uri(),
                    error = %err,
                    "metadata probe for ui failed"
                );
                let _ = ui.send(UiEvent::SourceMetadata {
                    metadata: Value::Null,
                });
            }
        }
    }

    async fn send_stream_details(&mut self, ui: &UnboundedSender<UiEvent>) {
        let reference = self.base.media_reference();
        let fps = reference.rate().to_fps();
        let mut payload = StreamDetailsPayload {
            uuid: self.base.uuid(),
            display_path: display_path(reference),
            fps_text: fps_text(fps),
            fps,
            current_detail: StreamDetail::default(),
            image_streams: self
                .base
                .streams(MediaType::Image)
                .iter()
                .filter_map(|uuid| {
                    self.streams.get(uuid).map(|stream| UuidStream {
                        uuid: *uuid,
                        stream: stream.clone(),
                    })
                })
                .collect(),
            current_image_stream: self.base.current(MediaType::Image),
        };

        if !self.streams.is_empty() {
            match self.current_stream_detail(MediaType::Image).await {
                Ok(detail) => payload.current_detail = detail,
                Err(err) => {
                    warn!(source = %self.base.uuid(), error = %err, "stream detail for ui failed");
                }
            }
        }
        let _ = ui.send(UiEvent::StreamDetails(Box::new(payload)));
    }
}

fn hash_pad() -> &'static Regex {
    static PAD: OnceLock<Regex> = OnceLock::new();
    PAD.get_or_init(|| {
        Regex::new(r"(?i)(?:\{|%7B):0(\d+)d(?:\}|%7D)|%0(\d+)d").expect("hash pad regex")
    })
}

/// Display path of the reference: for sequences the filename's pad tokens
/// are rewritten to `#`-padding (`shot.{:04d}.exr` becomes `shot.####.exr`).
fn display_path(reference: &MediaReference) -> String {
    let path = reference.base_uri().path().to_string();
    if reference.container() {
        return path;
    }
    match path.rsplit_once('/') {
        Some((dir, name)) => format!("{dir}/{}", hash_pad_filename(name)),
        None => hash_pad_filename(&path),
    }
}

fn hash_pad_filename(name: &str) -> String {
    hash_pad()
        .replace_all(name, |caps: &regex::Captures<'_>| {
            let width = caps
                .get(1)
                .or_else(|| caps.get(2))
                .and_then(|digits| digits.as_str().parse::<usize>().ok())
                .unwrap_or(1);
            "#".repeat(width.max(1))
        })
        .into_owned()
}

/// Frame rate as text: three decimals with trailing zeros trimmed, keeping
/// one zero after a bare decimal point.
fn fps_text(fps: f64) -> String {
    let mut text = format!("{fps:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    text
}

#[cfg(test)]
mod tests {
    use url::Url;

    use dailies_core::{FrameList, FrameRate, MediaReference};

    use super::{display_path, fps_text, hash_pad_filename};

    #[test]
    fn pad_tokens_become_hashes() {
        assert_eq!(hash_pad_filename("shot.%04d.exr"), "shot.####.exr");
        assert_eq!(hash_pad_filename("shot.{:04d}.exr"), "shot.####.exr");
        assert_eq!(hash_pad_filename("shot.%7B:06d%7D.exr"), "shot.######.exr");
        assert_eq!(hash_pad_filename("movie.mov"), "movie.mov");
    }

    #[test]
    fn sequence_display_paths_are_hash_padded() {
        let reference = MediaReference::new_sequence(
            Url::parse("file:///shots/shot.%04d.exr").expect("uri"),
            FrameList::from_range(1, 5),
            FrameRate::new(24, 1),
        );
        assert_eq!(display_path(&reference), "/shots/shot.####.exr");

        let container =
            MediaReference::new_container(Url::parse("file:///shots/movie.mov").expect("uri"));
        assert_eq!(display_path(&container), "/shots/movie.mov");
    }

    #[test]
    fn fps_text_trims_to_three_decimals() {
        assert_eq!(fps_text(24.0), "24.0");
        assert_eq!(fps_text(25.0), "25.0");
        assert_eq!(fps_text(23.976), "23.976");
        assert_eq!(fps_text(29.97), "29.97");
    }
}
