use tracing::debug;
use uuid::Uuid;

use dailies_core::{FrameList, FrameRate, FrameRateDuration, MediaReference, MediaType, StreamDetail};
use dailies_runtime::actor::{ActorContext, Handler, Message};

use crate::events::MediaEvent;
use crate::source::MediaSourceActor;
use crate::source::handlers::metadata::ProbeMetadataAndHookMessage;
use crate::stream::MediaStreamActor;
use crate::stream::handlers::ShutdownMessage as StreamShutdownMessage;

/// Acquire technical detail for a newly-referenced asset. `rate` is the
/// fallback frame rate applied whenever probing cannot determine one.
/// Idempotent: a source that already has streams reports success untouched.
pub struct AcquireMediaDetailMessage {
    pub rate: FrameRate,
}

impl Message for AcquireMediaDetailMessage {
    type Response = bool;
}

#[async_trait::async_trait]
impl Handler<AcquireMediaDetailMessage> for MediaSourceActor {
    async fn handle(
        &mut self,
        message: AcquireMediaDetailMessage,
        ctx: &mut ActorContext<Self>,
    ) -> bool {
        self.events.emit(MediaEvent::Name {
            uuid: self.base.uuid(),
            name: self.base.name().to_string(),
        });
        self.acquire_detail(message.rate, ctx).await
    }
}

impl MediaSourceActor {
    async fn acquire_detail(
        &mut self,
        rate: FrameRate,
        ctx: &mut ActorContext<Self>,
    ) -> bool {
        if !self.streams.is_empty() {
            return true;
        }
        if !self.base.online() {
            return false;
        }

        // Drop any half-configured children before re-probing.
        for (_, stream) in self.streams.drain() {
            let _ = stream.cast(StreamShutdownMessage);
        }
        self.base.clear_streams();

        let Some(reader) = self.services.reader.clone() else {
            return false;
        };
        // A container's frame-0 address is the container itself, duration
        // known or not; only sequences can fail to resolve here.
        let probe_uri = if self.base.media_reference().container() {
            self.base.media_reference().base_uri().clone()
        } else {
            match self.base.media_reference().uri(0) {
                Ok((uri, _frame)) => uri,
                Err(err) => {
                    self.base.set_error_detail(err.to_string());
                    return false;
                }
            }
        };

        let detail = match reader.probe(&probe_uri).await {
            Ok(detail) => detail,
            Err(reason) => {
                debug!(uri = %probe_uri, reason = reason.as_str(), "media detail probe failed");
                self.base.set_error_detail(reason.as_str());
                self.emit_changed();
                return false;
            }
        };

        if self.base.media_reference().timecode().total_frames() == 0 {
            self.base.media_reference_mut().set_timecode(detail.timecode);
        }
        self.base.set_reader(detail.reader.as_str());

        for mut info in detail.streams {
            if info.media_type == MediaType::Image {
                reconcile_image_stream(self.base.media_reference_mut(), &mut info, rate);
            }

            let uuid = Uuid::new_v4();
            let media_type = info.media_type;
            let entry = MediaStreamActor::spawn(info, uuid);
            self.streams.insert(uuid, entry.stream);
            self.base.add_media_stream(media_type, uuid);
            self.events.emit(MediaEvent::AddMediaStream {
                source: self.base.uuid(),
                stream: uuid,
            });

            debug!(
                fps = self.base.media_reference().rate().to_fps(),
                frames = self.base.media_reference().frame_count(),
                timecode = %self.base.media_reference().timecode(),
                "media stream added"
            );
        }

        let _ = ctx.cast_to_self(ProbeMetadataAndHookMessage);

        if !self.base.media_reference().container()
            && (self.base.media_reference().timecode().total_frames() == 0
                || self.base.media_reference().frame_list().start() != 0)
        {
            // For sequences the filename frame number is the canonical
            // timeline anchor; it overrides any embedded timecode.
            self.base.media_reference_mut().set_timecode_from_frames();
        }

        self.emit_changed();
        true
    }
}

/// Reconcile the user-declared duration/rate with the probed image stream.
///
/// Declared duration unknown: adopt the probed duration (or a single frame at
/// the probed rate, or the fallback) and derive the frame list. Declared
/// duration known: the declared frame count wins and only the rate is
/// refined, from the probe when it has one, from the fallback otherwise.
fn reconcile_image_stream(
    reference: &mut MediaReference,
    info: &mut StreamDetail,
    fallback: FrameRate,
) {
    if reference.duration().is_zero() {
        if !info.duration.is_zero() {
            reference.set_duration(info.duration);
            if !reference.container() {
                reference.set_frame_list(FrameList::from_range(0, info.duration.frames() - 1));
            }
        } else {
            let rate = if info.duration.rate().is_zero() {
                fallback
            } else {
                info.duration.rate()
            };
            let single = FrameRateDuration::new(1, rate);
            reference.set_duration(single);
            info.duration = single;
            if !reference.container() {
                reference.set_frame_list(FrameList::from_range(0, 0));
            }
        }
    } else if !info.duration.rate().is_zero() {
        let frames = reference.duration().frames();
        info.duration = FrameRateDuration::new(frames, info.duration.rate());
        reference.set_duration(info.duration);
    } else {
        if reference.container() {
            info.duration.set_rate(fallback);
        } else {
            let frames = reference.duration().frames();
            info.duration = FrameRateDuration::new(frames, fallback);
        }
        reference.set_rate(fallback);
    }
}
