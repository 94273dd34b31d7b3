// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber for the command-line tool
///
/// The library itself only emits events; installing a subscriber is left to
/// the application. The subscriber is configured with:
/// - Filtering from `RUST_LOG`, falling back to `warn`
/// - Human-readable or JSON output
/// - Output to stderr so stdout stays reserved for the generated URL
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Examples
///
/// ```
/// use imgproxy_url::logging::init_subscriber;
///
/// init_subscriber(false).expect("Failed to initialize logging");
/// tracing::debug!("Logging ready");
/// ```
pub fn init_subscriber(json: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
