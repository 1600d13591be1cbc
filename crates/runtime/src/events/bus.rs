//! Broadcast-backed event bus.

use tokio::sync::broadcast;

use super::types::HeroEvent;

/// Fan-out of [`HeroEvent`]s to any number of subscribers.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<HeroEvent>,
}

impl EventBus {
    /// Creates a new event bus with the given channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: HeroEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for hero event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HeroEvent> {
        self.tx.subscribe()
    }
}
