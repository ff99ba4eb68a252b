//! Shared constants for the digitgrid pipeline.

/// Replacement for an absent or empty raw item.
pub const EMPTY_ITEM_PLACEHOLDER: &str = "0";

/// Length filters above this value switch to the single-row rule.
pub const DEFAULT_SINGLE_ROW_THRESHOLD: usize = 900;

/// Time budget for the sanitizer's cleanup match, in milliseconds.
pub const DEFAULT_PATTERN_TIMEOUT_MS: u64 = 25_000;

/// Upper bound on `rows * columns` for a single matrix (4096 x 4096).
pub const DEFAULT_MAX_CELLS: usize = 16_777_216;

/// Default number of populator threads (0 = rayon global pool).
pub const DEFAULT_THREADS: usize = 0;

/// Compiled-program size limit for the sanitizer regex, in bytes.
pub const SANITIZER_REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "DIGITGRID_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "digitgrid.toml";
