//! Logger initialisation shared by the binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// When `verbose` is `true`, all debug messages are printed. Otherwise
/// only info level and above are shown. The `RUST_LOG` environment
/// variable overrides the chosen default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    init_with_level(level);
}

/// Initialises the global logger at an explicit default level.
///
/// `try_init` only fails if a logger was already set. Ignore that case
/// so tests can initialise repeatedly without panicking.
pub fn init_with_level(level: LevelFilter) {
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}
