//! The state-acquisition seam.

use sideguard_types::StateSnapshot;

/// Produces the snapshot a guarded invocation evaluates against.
///
/// The concrete telemetry source (BLE/WiFi/MQTT reads, a battery sensor) is
/// an external collaborator behind this single-method contract, injected at
/// gate construction. The gate calls `capture` exactly once per invocation;
/// the returned snapshot is exclusively owned by that invocation, so the
/// probe must return an internally consistent capture, not a live view.
pub trait StateProbe {
    fn capture(&self) -> StateSnapshot;
}

impl<F> StateProbe for F
where
    F: Fn() -> StateSnapshot,
{
    fn capture(&self) -> StateSnapshot {
        self()
    }
}
