//! Event payload types for pipeline lifecycle events.

/// Which entry point started a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Every item, two-dimensional rule.
    Unfiltered,
    /// Items of exactly this length, two-dimensional rule.
    ExactLength(usize),
    /// Items of exactly this length, single-row rule.
    SingleRow(usize),
    /// Per-item rule chosen by this many predicates.
    Predicates(usize),
}

/// Payload for `on_batch_started`.
#[derive(Debug, Clone)]
pub struct BatchStartedEvent {
    pub mode: BatchMode,
}

/// Payload for `on_item_built`.
#[derive(Debug, Clone)]
pub struct ItemBuiltEvent {
    pub index: usize,
    pub length: usize,
    pub rows: usize,
    pub columns: usize,
    pub filled_cells: usize,
}

/// Payload for `on_item_skipped`.
#[derive(Debug, Clone)]
pub struct ItemSkippedEvent {
    pub index: usize,
    pub length: usize,
    pub expected_length: usize,
}

/// Payload for `on_batch_complete`.
#[derive(Debug, Clone)]
pub struct BatchCompleteEvent {
    pub built: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub index: Option<usize>,
    pub message: String,
    pub error_code: String,
}
