use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rate::FrameRateDuration;
use crate::timecode::Timecode;

/// One contiguous span of media as a timeline consumer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditListSection {
    pub media_uuid: Uuid,
    pub duration: FrameRateDuration,
    pub timecode: Timecode,
}

/// A media source always projects to a single section; playlists concatenate
/// these into longer lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EditList {
    pub sections: Vec<EditListSection>,
}

impl EditList {
    pub fn single(media_uuid: Uuid, duration: FrameRateDuration, timecode: Timecode) -> Self {
        Self {
            sections: vec![EditListSection {
                media_uuid,
                duration,
                timecode,
            }],
        }
    }
}
