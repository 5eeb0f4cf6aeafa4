use serde::{Deserialize, Serialize};

/// Ordered file-frame numbers of a sequence, indexed by logical frame.
/// Containers carry an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FrameList {
    frames: Vec<i64>,
}

impl FrameList {
    pub fn new(frames: Vec<i64>) -> Self {
        Self { frames }
    }

    /// Inclusive contiguous range, `start..=end`.
    pub fn from_range(start: i64, end: i64) -> Self {
        if end < start {
            return Self::default();
        }
        Self {
            frames: (start..=end).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// First file frame, 0 when the list is empty.
    pub fn start(&self) -> i64 {
        self.frames.first().copied().unwrap_or(0)
    }

    /// File frame at a logical position.
    pub fn get(&self, logical: i64) -> Option<i64> {
        if logical < 0 {
            return None;
        }
        self.frames.get(logical as usize).copied()
    }

    /// Logical position of a file frame, if present.
    pub fn position_of(&self, file_frame: i64) -> Option<usize> {
        self.frames.iter().position(|frame| *frame == file_frame)
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.frames.iter().copied()
    }
}
