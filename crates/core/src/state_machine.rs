//! Command/event state machines for transient page state.

/// A state machine driven by commands and evolved by events.
///
/// - **Decision logic**: `handle(&self, cmd)` returns events and never mutates.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Implementations must not perform IO or side effects. Anything that talks to
/// the host (navigation, rendering) happens outside, after the events are
/// applied.
pub trait StateMachine {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Monotonically increasing revision of the state (+1 per applied event).
    ///
    /// Hosts compare revisions to decide whether bound display elements need a
    /// re-render.
    fn revision(&self) -> u64;

    /// Evolve in-memory state from a single event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}
