//! `env_logger` setup for the `rende` binary. The library itself only talks
//! to the `log` facade.

use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "info";

/// Starts from `RUST_LOG` (or `info`) and layers the config's `log_filter`
/// directives on top, so a config entry wins for the modules it names.
fn builder(log_filter: Option<&str>) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(filter) = log_filter {
        builder.parse_filters(filter);
    }
    builder.format_target(false);
    builder
}

/// Installs the global logger. Later calls leave the first logger in place.
pub fn init(log_filter: Option<&str>) {
    match builder(log_filter).try_init() {
        Ok(()) => log::debug!("logger ready (config filter: {log_filter:?})"),
        Err(_) => log::trace!("logger already installed"),
    }
}
