//! Logging setup for the `varahi-link` binary and anything else that drives
//! the varahi crates.

/// Initialize process-wide tracing with the varahi default filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, LOG_ENV};
