//! Logging infrastructure for the spabuild CLI.
//!
//! Logs go to stderr so that JSON printed on stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use spabuild_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false, None);
//! info!("Resolving configuration");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "spabuild=debug,spabuild_config=debug,spabuild_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "spabuild=info,spabuild_config=info,spabuild_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for spabuild crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. `settings.log_level` from the project file
/// 5. info for spabuild crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, configured: Option<&str>) {
    init_logger_with_filter(select_filter(verbose, quiet, configured), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn select_filter(verbose: bool, quiet: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    if quiet {
        return EnvFilter::new(QUIET_FILTER);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    configured
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise the
/// terminal behind stderr decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    // The global subscriber can only be installed once per process, so these
    // tests exercise filter selection only.

    #[test]
    fn verbose_wins_over_everything() {
        let filter = select_filter(true, false, Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn quiet_shows_errors_only() {
        let filter = select_filter(false, true, Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn invalid_configured_level_falls_back_to_default() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = select_filter(false, false, Some("spabuild=verbose"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn configured_level_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = select_filter(false, false, Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
