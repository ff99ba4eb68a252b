//! Error handling for digitgrid.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod dimension_error;
pub mod error_code;
pub mod matrix_error;
pub mod pipeline_error;
pub mod sanitize_error;

pub use config_error::ConfigError;
pub use dimension_error::DimensionError;
pub use error_code::GridErrorCode;
pub use matrix_error::MatrixError;
pub use pipeline_error::PipelineError;
pub use sanitize_error::SanitizeError;
