//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the uidrift tracing/logging system.
///
/// Reads `UIDRIFT_LOG` for per-crate log levels, e.g.
/// `UIDRIFT_LOG=uidrift_analysis=debug,uidrift_core=warn`.
/// Falls back to [`DEFAULT_LOG_FILTER`] when unset or invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
