use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
const DEV_FILTER: &str = "debug,hyper=info,mongodb=info,tower_http=debug";
const PROD_FILTER: &str = "info,mongodb=warn";

/// Install color-eyre before any fallible work in `main`.
///
/// Reports show the failing file/line; the environment section is suppressed.
/// Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global subscriber for the given environment.
///
/// - Production: flattened JSON events, no targets.
/// - Development: pretty multi-line output.
///
/// Both include `tracing_error::ErrorLayer` so eyre reports carry span traces.
/// `RUST_LOG` replaces the built-in filter. Returns `false` when a global
/// subscriber was already installed; the call is then a no-op.
pub fn init_tracing(environment: &Environment) -> bool {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if is_production {
            PROD_FILTER
        } else {
            DEV_FILTER
        })
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => {
            info!(environment = ?environment, "Tracing initialized");
            true
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
            false
        }
    }
}
