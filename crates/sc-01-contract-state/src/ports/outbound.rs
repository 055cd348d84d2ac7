use crate::events::StateChanged;

/// Sink for state change events.
pub trait StateChangePublisher: Send + Sync {
    /// Publish an event.
    ///
    /// Returns the number of subscribers that received it.
    fn publish(&self, event: StateChanged) -> usize;
}
