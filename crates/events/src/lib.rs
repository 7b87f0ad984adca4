//! Page-state events and the decide-then-apply execution helper.

pub mod event;
pub mod handler;

pub use event::Event;
pub use handler::execute;
