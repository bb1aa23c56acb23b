// src/utils/log.rs

//! Logging setup for the binary and the test suites.
//!
//! The library itself only uses the `log` facade (`debug!`, `info!`, `warn!`);
//! whoever embeds it decides where the records go. The helper below installs
//! an `env_logger` backend honouring `RUST_LOG`, defaulting to `info`.

use env_logger::Env;

/// Initializes a global logger.
///
/// Safe to call more than once; later calls are no-ops. Intended for the
/// command-line binary and for integration tests that want log output.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init();
}
