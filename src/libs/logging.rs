//! Tracing subscriber set-up for debug mode.
//!
//! Outside debug mode nothing is installed and the message macros print
//! straight to the console.

use super::messages::macros::{is_debug_mode, DEBUG_ENV};
use tracing_subscriber::EnvFilter;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Filter used when `RUST_LOG` is absent or unparsable.
pub const DEFAULT_FILTER: &str = "tasktrack=debug";

/// Installs a fmt subscriber when debug mode is on. Safe to call more than
/// once; later calls are no-ops.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            name = APP_METADATA_NAME,
            version = APP_METADATA_VERSION,
            debug_env = DEBUG_ENV,
            "logging initialised"
        );
    }
}
