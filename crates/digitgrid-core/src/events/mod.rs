//! Event system for digitgrid.
//! Trait-based handlers with no-op defaults, synchronous dispatch.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::GridEventHandler;
pub use types::*;
