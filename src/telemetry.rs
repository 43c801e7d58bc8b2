//! Telemetry helpers for applications embedding `conversion-chart`.
//!
//! The crate only emits `tracing` events: `debug` for pipeline rebuilds,
//! `trace` for viewport transitions, `warn` for self-healed windows and
//! rejected intents. Hosts either call one of the helpers below or install
//! their own subscriber.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "warn,conversion_chart=info";

/// Installs a compact `fmt` subscriber honouring `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return init_with_filter(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact `fmt` subscriber with an explicit filter directive,
/// ignoring `RUST_LOG`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return init_with_filter(tracing_subscriber::EnvFilter::new(directives));
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn init_with_filter(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
