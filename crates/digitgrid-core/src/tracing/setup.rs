//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

/// Filter used when `DIGITGRID_LOG` is unset or does not parse.
pub const DEFAULT_LOG_FILTER: &str = "digitgrid_core=info,digitgrid_matrix=info";

static INIT: Once = Once::new();

/// Resolve the log filter from `DIGITGRID_LOG`, e.g.
/// `DIGITGRID_LOG=digitgrid_matrix::pipeline=debug,digitgrid_core=warn`.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global fmt subscriber for the matrix pipeline.
///
/// Idempotent; later calls are no-ops. An already-installed global
/// subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_names(true))
            .with(log_filter())
            .try_init();
    });
}
