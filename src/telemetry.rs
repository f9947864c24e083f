//! Opt-in tracing setup for hosts embedding `svg-chart`.
//!
//! The library only emits `tracing` events. Hosts that already own a
//! subscriber should ignore this module.

/// Environment variable read before `RUST_LOG` when building the filter.
pub const LOG_ENV_VAR: &str = "SVG_CHART_LOG";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// The filter comes from `SVG_CHART_LOG`, then `RUST_LOG`, then `info`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
