//! `varahi-core` — building blocks shared by the enquiry and order pipelines.
//!
//! This crate contains **pure domain** primitives (no host, UI or IO concerns).

pub mod error;
pub mod state_machine;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use state_machine::StateMachine;
pub use value_object::ValueObject;
