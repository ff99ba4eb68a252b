//! Configuration system for digitgrid.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod grid_config;
pub mod matrix_config;
pub mod sanitizer_config;

pub use grid_config::{ConfigOverrides, GridConfig};
pub use matrix_config::MatrixConfig;
pub use sanitizer_config::SanitizerConfig;
