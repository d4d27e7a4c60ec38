//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `crate_name` and `tower_http`
/// log at `default_level`, everything else at `warn`.
pub fn setup_logger(crate_name: &str, default_level: &str) {
    let target = crate_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{target}={default_level},tower_http={default_level}"
        ))
    });

    // A subscriber may already be installed (e.g. in tests).
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set, keeping it");
    }
}
