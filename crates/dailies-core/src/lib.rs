//! Passive data model of the media review domain: rates, timecodes, frame
//! lists, media references and cache keys. Everything here is a value type;
//! the actors live in `dailies-media`.

mod edit_list;
mod error;
mod frame_list;
mod key;
mod rate;
mod reference;
mod stream;
mod timecode;

pub use edit_list::{EditList, EditListSection};
pub use error::MediaError;
pub use frame_list::FrameList;
pub use key::MediaKey;
pub use rate::{FrameRate, FrameRateDuration};
pub use reference::MediaReference;
pub use stream::{MediaDetail, MediaStatus, MediaType, StreamDetail};
pub use timecode::Timecode;
