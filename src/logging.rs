//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Install the global fmt subscriber with the given filter directive.
///
/// Falls back to `flavor_api=info` when `filter` does not parse. Only the
/// first call has any effect, and it is a no-op if a subscriber is already set.
pub fn init_tracing(filter: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // Another global subscriber may already be installed; keep it.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
