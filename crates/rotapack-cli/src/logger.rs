//! Logging setup built on the `tracing` ecosystem.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for rotapack crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `settings.log_level` from the configuration file
//! 5. info for rotapack crates
//!
//! # Example
//!
//! ```rust,no_run
//! use rotapack_cli::logger::init_logger;
//! use rotapack_config::GlobalSettings;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false, &GlobalSettings::default());
//!
//! info!("Loading configuration");
//! debug!(entry = "./src/constants.js", "probing");
//! ```

use rotapack_config::{GlobalSettings, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "rotapack_cli=debug,rotapack_config=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "rotapack_cli=info,rotapack_config=info";

/// Initialize the global tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs. Later
/// calls leave the first subscriber in place.
///
/// # Arguments
///
/// * `verbose` - Debug-level logging for rotapack crates
/// * `quiet` - Only error-level logs
/// * `no_color` - Disable ANSI colors in log lines
/// * `settings` - `[settings]` of the configuration file; supplies the
///   filter when neither flag nor `RUST_LOG` is given, and the line format
///
/// # Examples
///
/// ```rust,no_run
/// use rotapack_cli::logger::init_logger;
/// use rotapack_config::{GlobalSettings, LogFormat};
///
/// // Default logging (info level)
/// init_logger(false, false, false, &GlobalSettings::default());
///
/// // Pretty debug logging without colors
/// let settings = GlobalSettings {
///     log_level: Some("rotapack_config=debug".to_string()),
///     log_format: Some(LogFormat::Pretty),
/// };
/// init_logger(false, false, true, &settings);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, settings: &GlobalSettings) {
    let filter = select_filter(verbose, quiet, settings);
    let ansi = !no_color && crate::ui::should_use_color();

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi);

    // `try_init` so a second call (tests, embedding) is a no-op
    let registry = tracing_subscriber::registry().with(filter);
    let _ = match settings.log_format.unwrap_or_default() {
        LogFormat::Compact => registry.with(base.compact()).try_init(),
        LogFormat::Pretty => registry.with(base.pretty()).try_init(),
        LogFormat::Full => registry.with(base).try_init(),
    };
}

fn select_filter(verbose: bool, quiet: bool, settings: &GlobalSettings) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    if quiet {
        return EnvFilter::new(QUIET_FILTER);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    settings
        .log_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
