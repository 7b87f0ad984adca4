//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Env var holding filter directives for the varahi binaries. Takes precedence
/// over `RUST_LOG`.
pub const LOG_ENV: &str = "VARAHI_LOG";

/// Used when neither env var is set: our own crates (`varahi_*`, `varahi_link`)
/// at `info`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,varahi=info";

/// Filter directives from `VARAHI_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
/// Blank values are skipped.
pub fn directives(lookup: impl Fn(&str) -> Option<String>) -> String {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Initialize tracing/logging for the process.
///
/// JSON lines on stderr so stdout stays free for the deep link the binary
/// prints. Directives that fail to parse fall back to [`DEFAULT_FILTER`]. Safe
/// to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let wanted = directives(|key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&wanted).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_used_without_env() {
        assert_eq!(directives(|_| None), DEFAULT_FILTER);
        assert_eq!(directives(|_| Some("   ".to_string())), DEFAULT_FILTER);
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn varahi_log_wins_over_rust_log() {
        let both = |key: &str| match key {
            LOG_ENV => Some("varahi_dispatch=debug".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        };
        assert_eq!(directives(both), "varahi_dispatch=debug");

        let rust_log_only = |key: &str| (key == "RUST_LOG").then(|| "debug".to_string());
        assert_eq!(directives(rust_log_only), "debug");
    }

    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        crate::init();
    }
}
