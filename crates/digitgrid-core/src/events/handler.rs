//! GridEventHandler trait, all methods no-op by default.

use super::types::*;

/// Trait for observing pipeline events.
///
/// Handlers only override the events they care about. `Send + Sync` is
/// required because a pipeline may be shared across threads.
pub trait GridEventHandler: Send + Sync {
    fn on_batch_started(&self, _event: &BatchStartedEvent) {}
    fn on_item_built(&self, _event: &ItemBuiltEvent) {}
    fn on_item_skipped(&self, _event: &ItemSkippedEvent) {}
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
