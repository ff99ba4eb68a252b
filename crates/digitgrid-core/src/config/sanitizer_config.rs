//! Sanitizer configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PATTERN_TIMEOUT_MS;

/// Configuration for the raw-item sanitizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Time budget for the cleanup match in milliseconds. Default: 25000.
    pub pattern_timeout_ms: Option<u64>,
}

impl SanitizerConfig {
    /// Returns the effective pattern timeout, defaulting to 25s.
    pub fn effective_pattern_timeout(&self) -> Duration {
        Duration::from_millis(
            self.pattern_timeout_ms
                .unwrap_or(DEFAULT_PATTERN_TIMEOUT_MS),
        )
    }
}
