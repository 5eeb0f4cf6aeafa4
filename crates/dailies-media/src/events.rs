use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Events a media source broadcasts to subscribers. Downstream caches,
/// decoders and UI stay coherent by watching these.
#[derive(Debug, Clone)]
pub enum MediaEvent {
    /// Source state changed: name, status, reference, streams or metadata.
    Changed { uuid: Uuid },
    /// A stream joined the source.
    AddMediaStream { source: Uuid, stream: Uuid },
    /// The source name, sent on rename and at detail acquisition.
    Name { uuid: Uuid, name: String },
    /// A metadata probe landed; the payload is the probed document.
    Metadata { uuid: Uuid, metadata: Value },
}

pub struct EventHub {
    tx: broadcast::Sender<MediaEvent>,
}

impl EventHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MediaEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: MediaEvent) {
        let _ = self.tx.send(event);
    }
}
