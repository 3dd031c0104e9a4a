use std::sync::Arc;
use tokio::sync::broadcast;

use crate::error::BridgeError;

/// Broadcast topic carrying one message representation.
/// `T` must be `Send + Sync` because the bridge tasks hop across threads.
#[derive(Debug, Clone)]
pub struct Topic<T> {
    tx: broadcast::Sender<Arc<T>>,
}

impl<T: Send + Sync + 'static> Topic<T> {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish `msg`, returning how many subscribers will see it.
    pub fn publish(&self, msg: T) -> Result<usize, BridgeError> {
        self.tx
            .send(Arc::new(msg))
            .map_err(|_| BridgeError::ChannelClosed("topic has no subscribers"))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<T>> {
        self.tx.subscribe()
    }
}
