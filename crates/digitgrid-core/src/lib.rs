//! Core types, errors, config, events, tracing, and constants for digitgrid.
//!
//! Holds no matrix logic; `digitgrid-matrix` builds on these pieces.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
