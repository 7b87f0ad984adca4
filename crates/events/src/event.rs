use chrono::{DateTime, Utc};

/// A fact about a transition in page state (field edit, gate change, dispatch).
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **transient** (they live for one page view and are only logged)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "catalog.selection.opened").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (wall-clock time of the user action).
    fn occurred_at(&self) -> DateTime<Utc>;
}
