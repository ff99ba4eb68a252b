//! Observability for digitgrid.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::{init_tracing, log_filter, DEFAULT_LOG_FILTER};
