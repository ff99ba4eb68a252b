//! GridErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait GridErrorCode {
    /// Returns the error code string (e.g., "DIVIDE_BY_ZERO").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const PATTERN_TIMEOUT: &str = "PATTERN_TIMEOUT";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const DIVIDE_BY_ZERO: &str = "DIVIDE_BY_ZERO";
pub const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
