//! Logging setup for the trine CLI.
//!
//! Logs go to stderr so the JSON plan on stdout stays machine-readable. The
//! subscriber is installed before configuration is loaded, so config loading
//! can log too.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for trine crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `settings.log_level` from the config (applied once loaded), else `info`

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

const VERBOSE_FILTER: &str = "trine_config=debug,trine_target=debug,trine_cli=debug";
const DEFAULT_LEVEL: &str = "info";

/// Handle to the installed filter.
///
/// Holds a reload handle only when the filter is the fallback default, so a
/// config-provided level never overrides flags or `RUST_LOG`.
pub struct LoggerHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LoggerHandle {
    /// Replace the fallback filter with `settings.log_level`.
    pub fn apply_default_level(&self, level: Option<&str>) {
        let (Some(handle), Some(level)) = (&self.reload, level) else {
            return;
        };
        match EnvFilter::try_new(level) {
            Ok(filter) => {
                if let Err(err) = handle.reload(filter) {
                    tracing::warn!(%err, "could not apply configured log level");
                }
            }
            Err(err) => tracing::warn!(level, %err, "invalid log_level in config"),
        }
    }
}

pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) -> LoggerHandle {
    let (filter, is_default) = build_filter(verbose, quiet);
    let (filter, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed (tests, embedding); keep it.
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    LoggerHandle {
        reload: (installed && is_default).then_some(handle),
    }
}

/// Filter from flags and environment; the flag is true for the fallback.
fn build_filter(verbose: bool, quiet: bool) -> (EnvFilter, bool) {
    if verbose {
        (EnvFilter::new(VERBOSE_FILTER), false)
    } else if quiet {
        (EnvFilter::new("error"), false)
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, false),
            Err(_) => (EnvFilter::new(DEFAULT_LEVEL), true),
        }
    }
}
