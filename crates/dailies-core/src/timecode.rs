use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rate::FrameRate;

/// SMPTE non-drop timecode. The frames-per-second base is stored alongside
/// the fields so a timecode can be converted back to a frame count without
/// consulting the source it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Timecode {
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    fps: u32,
}

impl Timecode {
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32, rate: &FrameRate) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
            fps: rounded_fps(rate),
        }
    }

    /// Timecode equivalent of an absolute frame count at the given rate.
    pub fn from_frames(total: i64, rate: &FrameRate) -> Self {
        let fps = rounded_fps(rate).max(1);
        let total = total.max(0) as u64;
        let fps64 = u64::from(fps);
        let seconds_total = total / fps64;
        Self {
            hours: (seconds_total / 3600) as u32,
            minutes: ((seconds_total / 60) % 60) as u32,
            seconds: (seconds_total % 60) as u32,
            frames: (total % fps64) as u32,
            fps,
        }
    }

    /// Absolute frame count of this timecode; zero for the default timecode.
    pub fn total_frames(&self) -> i64 {
        let seconds_total =
            u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds);
        (seconds_total * u64::from(self.fps) + u64::from(self.frames)) as i64
    }
}

fn rounded_fps(rate: &FrameRate) -> u32 {
    rate.to_fps().round() as u32
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}
