//! Tracing subscriber setup for embedding applications.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Filter comes from `QUILL_LOG` (falls back to `info`). Returns quietly if
/// a subscriber is already installed, so library tests can call it freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUILL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
    ::tracing::debug!("tracing initialized");
}
