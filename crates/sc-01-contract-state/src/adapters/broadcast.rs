//! # Broadcast Publisher
//!
//! Fans state change events out to any number of view subscribers.

use crate::events::StateChanged;
use crate::ports::StateChangePublisher;
use crate::DEFAULT_EVENT_CAPACITY;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The publisher was dropped.
    #[error("State change publisher closed")]
    Closed,
}

/// In-memory publisher backed by `tokio::sync::broadcast`.
///
/// Sending never blocks; a subscriber that falls more than `capacity` events
/// behind skips the oldest ones.
pub struct BroadcastPublisher {
    sender: broadcast::Sender<StateChanged>,
    events_published: AtomicU64,
    capacity: usize,
}

impl BroadcastPublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// # Panics
    ///
    /// If `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        debug!(subscribers = self.sender.receiver_count() + 1, "New state subscription");
        StateSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl StateChangePublisher for BroadcastPublisher {
    fn publish(&self, event: StateChanged) -> usize {
        let sequence = event.sequence;
        self.events_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!(sequence, "State change published with no subscribers");
                0
            }
        }
    }
}

impl<P: StateChangePublisher + ?Sized> StateChangePublisher for Arc<P> {
    fn publish(&self, event: StateChanged) -> usize {
        (**self).publish(event)
    }
}

/// Publisher that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl StateChangePublisher for NoopPublisher {
    fn publish(&self, _event: StateChanged) -> usize {
        0
    }
}

/// Receiving side of a [`BroadcastPublisher`].
pub struct StateSubscription {
    receiver: broadcast::Receiver<StateChanged>,
}

impl StateSubscription {
    /// Receive the next event.
    ///
    /// Returns `None` once the publisher is gone.
    pub async fn recv(&mut self) -> Option<StateChanged> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "State subscriber lagged, events dropped");
                }
            }
        }
    }

    /// Receive the next event without waiting.
    ///
    /// - `Ok(Some(event))` - an event was available
    /// - `Ok(None)` - nothing pending
    /// - `Err(SubscriptionError::Closed)` - the publisher is gone
    pub fn try_recv(&mut self) -> Result<Option<StateChanged>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Ok(Some(event)),
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "State subscriber lagged, events dropped");
                }
            }
        }
    }

    /// Turn the subscription into a stream. Lagged gaps are skipped.
    pub fn into_stream(self) -> impl Stream<Item = StateChanged> {
        BroadcastStream::new(self.receiver).filter_map(|event| event.ok())
    }
}
