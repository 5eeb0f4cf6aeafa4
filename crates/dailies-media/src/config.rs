use std::time::Duration;

/// Knobs threaded into every spawned source instead of ambient globals.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Timeout for calls to child actors (streams, metadata store) and to
    /// duplicated sources.
    pub call_timeout: Duration,
    /// Capacity of the change-event broadcast channel.
    pub event_capacity: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(30),
            event_capacity: 1024,
        }
    }
}
