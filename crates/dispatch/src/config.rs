//! Dispatch configuration (messaging host + destination).
//!
//! Both are process-wide and read-only once the surfaces are built. The
//! defaults are the company's WhatsApp number on `wa.me`; deployments may
//! override them through the environment.

use crate::deep_link::{DeepLinkEncoder, Destination};

/// Company WhatsApp number.
pub const DEFAULT_DESTINATION: &str = "+918333876725";

/// Messaging host serving click-to-chat links.
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";

const DESTINATION_ENV: &str = "VARAHI_WHATSAPP_NUMBER";
const HOST_ENV: &str = "VARAHI_MESSAGING_HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub host: String,
    pub destination: Destination,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MESSAGING_HOST.to_string(),
            destination: default_destination(),
        }
    }
}

impl DispatchConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Invalid overrides are logged and replaced by the defaults; configuration
    /// never prevents the site from dispatching.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DESTINATION_ENV) {
            match Destination::new(raw.trim()) {
                Ok(destination) => config.destination = destination,
                Err(err) => tracing::warn!(
                    error = %err,
                    "{DESTINATION_ENV} is invalid; using default destination"
                ),
            }
        }

        if let Some(raw) = lookup(HOST_ENV) {
            let host = raw.trim();
            if is_valid_host(host) {
                config.host = host.to_string();
            } else {
                tracing::warn!(host, "{HOST_ENV} is invalid; using {DEFAULT_MESSAGING_HOST}");
            }
        }

        config
    }

    pub fn encoder(&self) -> DeepLinkEncoder {
        DeepLinkEncoder::with_host(self.host.clone(), self.destination.clone())
    }
}

fn default_destination() -> Destination {
    Destination(DEFAULT_DESTINATION.to_string())
}

fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-' || b == b':')
}
