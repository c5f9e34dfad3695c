//! Telemetry helpers for applications embedding `timeline-rs`.
//!
//! Layout passes emit `tracing` events (`debug` for range, unit and format
//! changes, `trace` per graduation pass). Hosts either call
//! `init_default_tracing` or install their own subscriber.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG`, falling back to `default_directive`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}

/// Same as [`init_tracing_with_default`] with an `info` fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}
