//! Host navigation capability.

use std::io::Write;
use std::sync::Mutex;

use crate::deep_link::DeepLink;

/// "Open this URL in a new navigation context."
///
/// One-way and fire-and-forget: implementations return immediately and report
/// nothing back. Whether the messaging app actually opens is the host's
/// concern.
pub trait Navigator {
    fn open(&self, url: &DeepLink);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn open(&self, url: &DeepLink) {
        (**self).open(url)
    }
}

/// In-memory navigator for tests/dev.
///
/// Records every requested URL in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<DeepLink>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<DeepLink> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<DeepLink> {
        self.opened
            .lock()
            .ok()
            .and_then(|opened| opened.last().cloned())
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &DeepLink) {
        // A poisoned lock only loses the record; navigation is best-effort.
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.clone());
        }
    }
}

/// Writes each URL on its own line to stdout (link preview / headless hosts).
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn open(&self, url: &DeepLink) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{url}") {
            tracing::warn!(error = %err, "failed to write deep link to stdout");
        }
    }
}
