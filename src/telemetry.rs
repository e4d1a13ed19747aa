//! Telemetry helpers for applications embedding `datum-aspect`.
//!
//! Nothing is installed implicitly. Hosts either call `init_default_tracing`
//! or route the crate's `datum_aspect` target through their own subscriber.

/// Filter used when `RUST_LOG` is unset: this crate's events at `info`,
/// everything else off.
pub const DEFAULT_TRACING_FILTER: &str = "datum_aspect=info";

/// Installs a compact stderr subscriber for datum events when the
/// `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_TRACING_FILTER`]. Targets are
/// printed so `axis_length` fallbacks can be told apart from host logs.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(filter = DEFAULT_TRACING_FILTER, "datum telemetry enabled");
        }
        installed
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
