use serde::{Deserialize, Serialize};

/// Rational frames-per-second. A zero numerator means the rate is unknown;
/// sources never expose a zero rate once detail acquisition has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRate {
    num: u32,
    den: u32,
}

impl FrameRate {
    pub const ZERO: FrameRate = FrameRate { num: 0, den: 1 };

    pub fn new(num: u32, den: u32) -> Self {
        Self {
            num,
            den: den.max(1),
        }
    }

    /// Snap NTSC-style fractional rates to their exact rationals; everything
    /// else becomes a millifps rational.
    pub fn from_fps(fps: f64) -> Self {
        if fps <= 0.0 {
            return Self::ZERO;
        }
        const NTSC: &[(f64, u32, u32)] = &[
            (23.976, 24000, 1001),
            (29.97, 30000, 1001),
            (59.94, 60000, 1001),
        ];
        for (fractional, num, den) in NTSC {
            if (fps - fractional).abs() < 1e-3 {
                return Self::new(*num, *den);
            }
        }
        if (fps - fps.round()).abs() < 1e-9 {
            Self::new(fps.round() as u32, 1)
        } else {
            Self::new((fps * 1000.0).round() as u32, 1000)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn to_fps(&self) -> f64 {
        if self.den == 0 {
            return 0.0;
        }
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds, 0.0 when the rate is unknown.
    pub fn frame_seconds(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        f64::from(self.den) / f64::from(self.num)
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A frame count paired with the rate it is counted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FrameRateDuration {
    frames: i64,
    rate: FrameRate,
}

impl FrameRateDuration {
    pub fn new(frames: i64, rate: FrameRate) -> Self {
        Self { frames, rate }
    }

    pub fn frames(&self) -> i64 {
        self.frames
    }

    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: FrameRate) {
        self.rate = rate;
    }

    /// Unknown-duration state: no frames, or frames counted at no rate.
    pub fn is_zero(&self) -> bool {
        self.frames <= 0 || self.rate.is_zero()
    }

    pub fn seconds(&self) -> f64 {
        self.frames as f64 * self.rate.frame_seconds()
    }
}
