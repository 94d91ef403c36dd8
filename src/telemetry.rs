//! Tracing setup for demos and ad-hoc debugging.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedding application's call. This helper wires up the usual
//! fmt/env-filter stack for executables that have no opinion of their own.

use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber honoring `RUST_LOG`, defaulting to
/// `info`.
///
/// Safe to call more than once; only the first installation wins.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
