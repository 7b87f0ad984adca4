//! Deep-link dispatch: encoding the message, handing it to the host and
//! resetting form state afterwards.
//!
//! The only side effect of the whole pipeline, opening a URL, goes through the
//! injected [`Navigator`] capability.

pub mod config;
pub mod controller;
pub mod deep_link;
pub mod navigator;

pub use config::{DEFAULT_DESTINATION, DEFAULT_MESSAGING_HOST, DispatchConfig};
pub use controller::{
    FormKind, MessageDispatched, SubmissionController, SubmissionState, SubmitOutcome,
};
pub use deep_link::{DeepLink, DeepLinkEncoder, Destination, decode_text};
pub use navigator::{Navigator, RecordingNavigator, StdoutNavigator};
