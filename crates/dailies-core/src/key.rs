use serde::{Deserialize, Serialize};
use url::Url;

/// Content-addressed cache fingerprint of one frame of one stream. Built from
/// a stream's `key_format` by substituting the `{uri}`, `{frame}` and
/// `{stream}` tokens; equality defines cache identity. The default
/// (empty) key marks a blank position in positional key vectors.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct MediaKey(String);

impl MediaKey {
    pub const DEFAULT_FORMAT: &'static str = "{uri}::{frame}::{stream}";

    pub fn new(key_format: &str, uri: &Url, frame: i64, stream_name: &str) -> Self {
        let format = if key_format.is_empty() {
            Self::DEFAULT_FORMAT
        } else {
            key_format
        };
        let key = format
            .replace("{uri}", uri.as_str())
            .replace("{frame}", &frame.to_string())
            .replace("{stream}", stream_name);
        Self(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
