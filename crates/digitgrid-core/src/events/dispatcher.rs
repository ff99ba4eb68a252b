//! Synchronous event fan-out; a no-op when no handlers are registered.

use std::sync::Arc;

use super::handler::GridEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn GridEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn GridEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop the others.
    fn emit<F: Fn(&dyn GridEventHandler)>(&self, f: F) {
        for (idx, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(handler = idx, "event handler panicked");
            }
        }
    }

    pub fn emit_batch_started(&self, event: &BatchStartedEvent) {
        self.emit(|h| h.on_batch_started(event));
    }

    pub fn emit_item_built(&self, event: &ItemBuiltEvent) {
        self.emit(|h| h.on_item_built(event));
    }

    pub fn emit_item_skipped(&self, event: &ItemSkippedEvent) {
        self.emit(|h| h.on_item_skipped(event));
    }

    pub fn emit_batch_complete(&self, event: &BatchCompleteEvent) {
        self.emit(|h| h.on_batch_complete(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
