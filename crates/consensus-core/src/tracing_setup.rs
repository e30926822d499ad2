//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_FILTER;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the consensus tracing/logging system.
///
/// Reads the `CONSENSUS_LOG` environment variable for per-target levels,
/// e.g. `CONSENSUS_LOG=consensus_aggregation=debug,consensus_equivalence=warn`.
/// Falls back to `consensus=info` if unset or invalid.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = filter.to_string();
    INIT.call_once(move || {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_test_writer())
            .with(EnvFilter::new(filter))
            .try_init();
    });
}
