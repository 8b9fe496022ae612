//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Filter used when neither `--log-filter` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "teqdr_review=info,teqdr_core=info,teqdr_ui=info";

/// Builds the filter from explicit directives, else `RUST_LOG`, else the default.
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives {
        Some(d) => EnvFilter::try_new(d),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Installs the global fmt subscriber.
pub fn init(directives: Option<&str>) -> Result<(), ParseError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives)?)
        .with_target(false)
        .init();
    Ok(())
}
