use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::MediaError;
use crate::frame_list::FrameList;
use crate::rate::{FrameRate, FrameRateDuration};
use crate::timecode::Timecode;

/// Pad tokens accepted in sequence URI templates: `{:04d}` (also in its
/// percent-encoded form) and printf-style `%04d`.
fn pad_token() -> &'static Regex {
    static PAD: OnceLock<Regex> = OnceLock::new();
    PAD.get_or_init(|| {
        Regex::new(r"(?i)(?:\{|%7B):0(\d+)d(?:\}|%7D)|%0(\d+)d").expect("pad token regex")
    })
}

/// The physical addressing model of one media asset: a single container file
/// or a numbered frame sequence, plus rate, duration and timecode.
///
/// Logical frames are 0-based positions in the source timeline; file frames
/// are the integers baked into sequence filenames (or implicit container
/// offsets). This type is the only place that mapping lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference {
    uri: Url,
    container: bool,
    frame_list: FrameList,
    duration: FrameRateDuration,
    timecode: Timecode,
}

impl MediaReference {
    pub fn new_container(uri: Url) -> Self {
        Self {
            uri,
            container: true,
            frame_list: FrameList::default(),
            duration: FrameRateDuration::default(),
            timecode: Timecode::default(),
        }
    }

    /// A sequence keeps the user-declared frame list authoritative: the
    /// duration is derived from it so probing can refine the rate without
    /// discarding the list.
    pub fn new_sequence(uri: Url, frame_list: FrameList, rate: FrameRate) -> Self {
        let duration = FrameRateDuration::new(frame_list.len() as i64, rate);
        Self {
            uri,
            container: false,
            frame_list,
            duration,
            timecode: Timecode::default(),
        }
    }

    pub fn container(&self) -> bool {
        self.container
    }

    pub fn base_uri(&self) -> &Url {
        &self.uri
    }

    pub fn frame_list(&self) -> &FrameList {
        &self.frame_list
    }

    pub fn set_frame_list(&mut self, frame_list: FrameList) {
        self.frame_list = frame_list;
    }

    pub fn duration(&self) -> FrameRateDuration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: FrameRateDuration) {
        self.duration = duration;
    }

    pub fn rate(&self) -> FrameRate {
        self.duration.rate()
    }

    pub fn set_rate(&mut self, rate: FrameRate) {
        self.duration.set_rate(rate);
    }

    /// Total logical frames.
    pub fn frame_count(&self) -> i64 {
        self.duration.frames()
    }

    pub fn timecode(&self) -> Timecode {
        self.timecode
    }

    pub fn set_timecode(&mut self, timecode: Timecode) {
        self.timecode = timecode;
    }

    /// Anchor the timecode to the first file frame. In sequence workflows the
    /// filename frame number is the canonical timeline anchor; embedded
    /// timecodes are unreliable.
    pub fn set_timecode_from_frames(&mut self) {
        let first = self.frame(0).unwrap_or(0);
        self.timecode = Timecode::from_frames(first, &self.rate());
    }

    /// File-frame number of a logical frame. An empty source (`frames == 0`)
    /// rejects every index.
    pub fn frame(&self, logical: i64) -> Result<i64, MediaError> {
        if self.container {
            if logical < 0 || logical >= self.frame_count() {
                return Err(MediaError::InvalidFrameIndex { frame: logical });
            }
            return Ok(logical);
        }
        self.frame_list
            .get(logical)
            .ok_or(MediaError::InvalidFrameIndex { frame: logical })
    }

    /// Concrete URI and file frame of a logical frame.
    pub fn uri(&self, logical: i64) -> Result<(Url, i64), MediaError> {
        let file_frame = self.frame(logical)?;
        if self.container {
            return Ok((self.uri.clone(), file_frame));
        }
        Ok((resolve_template(&self.uri, file_frame), file_frame))
    }

    /// `(uri, file_frame)` for every logical frame, in order.
    pub fn uris(&self) -> Vec<(Url, i64)> {
        if self.container {
            return (0..self.frame_count())
                .map(|frame| (self.uri.clone(), frame))
                .collect();
        }
        self.frame_list
            .iter()
            .map(|file_frame| (resolve_template(&self.uri, file_frame), file_frame))
            .collect()
    }

    /// URI of a specific file frame. Sequences only.
    pub fn uri_from_frame(&self, file_frame: i64) -> Result<Url, MediaError> {
        if self.container {
            return Err(MediaError::NoFrames);
        }
        if self.frame_list.position_of(file_frame).is_none() {
            return Err(MediaError::InvalidFrameIndex { frame: file_frame });
        }
        Ok(resolve_template(&self.uri, file_frame))
    }
}

/// Substitute the first pad token with a zero-padded file frame. A template
/// with no token resolves to itself.
fn resolve_template(template: &Url, file_frame: i64) -> Url {
    let raw = template.as_str();
    let Some(captures) = pad_token().captures(raw) else {
        return template.clone();
    };
    let width = captures
        .get(1)
        .or_else(|| captures.get(2))
        .and_then(|digits| digits.as_str().parse::<usize>().ok())
        .unwrap_or(0);
    let token = captures.get(0).map(|m| m.range()).unwrap_or(0..0);
    let mut resolved = String::with_capacity(raw.len());
    resolved.push_str(&raw[..token.start]);
    resolved.push_str(&format!("{file_frame:0width$}"));
    resolved.push_str(&raw[token.end..]);
    Url::parse(&resolved).unwrap_or_else(|_| template.clone())
}
