use varahi_core::StateMachine;

use crate::Event;

/// Execute a state machine command deterministically (no IO, no async).
///
/// 1. **Decide**: `machine.handle(command)` returns events without mutating.
/// 2. **Evolve**: each event is applied in order via `machine.apply(event)`.
///
/// Every applied event is logged at `debug` with its type. If `handle` fails
/// nothing is applied.
pub fn execute<M>(machine: &mut M, command: &M::Command) -> Result<Vec<M::Event>, M::Error>
where
    M: StateMachine,
    M::Event: Event,
{
    let events = machine.handle(command)?;
    for ev in &events {
        machine.apply(ev);
        tracing::debug!(
            event_type = ev.event_type(),
            revision = machine.revision(),
            "state transition applied"
        );
    }
    Ok(events)
}
