//! The error taxonomy of the media source surface.
//!
//! [`MediaError`] is the domain error every source operation replies with.
//! Actor-transport failures ([`CallError`]) are folded in through
//! [`MediaError::from_call_error`] so callers see one error type.

use thiserror::Error;

use dailies_runtime::actor::CallError;

/// Errors produced by media source and media stream operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// Backing storage is unreachable; detail acquisition is refused.
    #[error("media source is offline")]
    Offline,
    /// Logical frame outside `[0, frames)`, or the source is empty.
    #[error("invalid frame index {frame}")]
    InvalidFrameIndex {
        /// The rejected logical (or file) frame.
        frame: i64,
    },
    /// The operation needs a stream that does not exist.
    #[error("no media streams")]
    NoStreams,
    /// Frame-level operation invoked on a container.
    #[error("media has no frames")]
    NoFrames,
    /// The reader registry failed to probe the asset.
    #[error("media reader failed: {reason}")]
    Reader { reason: String },
    /// The metadata plugin failed.
    #[error("metadata probe failed: {reason}")]
    Metadata { reason: String },
    /// Propagated from the image or audio cache.
    #[error("cache erase failed: {reason}")]
    Cache { reason: String },
    /// Any other underlying failure, message included.
    #[error("{reason}")]
    Generic { reason: String },
}

impl MediaError {
    pub fn generic(reason: impl Into<String>) -> Self {
        Self::Generic {
            reason: reason.into(),
        }
    }

    /// Fold an actor-transport failure into the domain taxonomy.
    pub fn from_call_error(operation: &'static str, err: CallError) -> Self {
        match err {
            CallError::Disconnected => Self::Generic {
                reason: format!("actor exited while handling '{operation}'"),
            },
            CallError::TimedOut => Self::Generic {
                reason: format!("'{operation}' timed out"),
            },
        }
    }
}
