//! Form capture for the contact and order flows.
//!
//! This crate holds the per-form field stores, the snapshot types they hold and
//! the pure message formatter. It is deterministic domain logic (no IO, no
//! rendering, no navigation).

pub mod contact;
pub mod field_store;
pub mod message;
pub mod order;

pub use contact::{ContactField, ContactSnapshot};
pub use field_store::{
    FieldChanged, FieldStore, FormCommand, FormEvent, FormField, FormReset, FormSchema,
};
pub use message::{NOT_SPECIFIED, contact_message, order_message};
pub use order::{OrderField, OrderSnapshot};
