//! Utility functions for the schedule OCR pipeline.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` and defaults to `info` when unset. Calling this more
/// than once is a no-op; the first subscriber wins.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
