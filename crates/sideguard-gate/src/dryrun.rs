//! Dry-run simulation: the decision path with execution suppressed.

use crate::gate::Gate;
use sideguard_types::{SimulationReport, StateSnapshot};

/// Drives a bound gate's decision path against an injected snapshot.
///
/// The harness substitutes the gate's state probe with the injected snapshot
/// and stops before the execute step: the wrapped operation's body is never
/// entered, for any injected state, including states that pass every rule.
/// This makes deterministic test fixtures (state → expected allow/deny)
/// possible without physical hardware or live network access.
pub struct DryRunHarness;

impl DryRunHarness {
    pub fn run<A, T>(gate: &Gate<A, T>, injected: &StateSnapshot) -> SimulationReport {
        SimulationReport::from_decision(&gate.decide(injected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateBuilder;
    use crate::policy::OnFail;
    use sideguard_domain::rules::{BatteryMin, RequireConnectivity};
    use sideguard_types::StateSnapshot;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn probed_gate(
        probe_captures: Arc<AtomicUsize>,
        operation_calls: Arc<AtomicUsize>,
    ) -> Gate<(), &'static str> {
        GateBuilder::new(move || {
            probe_captures.fetch_add(1, Ordering::SeqCst);
            StateSnapshot::new()
        })
        .rule(BatteryMin::new(15.0))
        .rule(RequireConnectivity::new("BLE"))
        .on_fail(OnFail::Return)
        .operation(move |(): ()| {
            operation_calls.fetch_add(1, Ordering::SeqCst);
            "executed"
        })
    }

    #[test]
    fn dry_run_never_triggers_the_operation_even_when_all_rules_pass() {
        let probe_captures = Arc::new(AtomicUsize::new(0));
        let operation_calls = Arc::new(AtomicUsize::new(0));
        let gate = probed_gate(Arc::clone(&probe_captures), Arc::clone(&operation_calls));

        let passing = StateSnapshot::new()
            .with("battery", 90.0)
            .with("connection", "ble");
        let report = DryRunHarness::run(&gate, &passing);

        assert!(report.success);
        assert!(report.reason.is_none());
        assert_eq!(operation_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dry_run_uses_the_injected_snapshot_not_the_probe() {
        let probe_captures = Arc::new(AtomicUsize::new(0));
        let operation_calls = Arc::new(AtomicUsize::new(0));
        let gate = probed_gate(Arc::clone(&probe_captures), Arc::clone(&operation_calls));

        let injected = StateSnapshot::new()
            .with("battery", 10.0)
            .with("connection", "offline");
        let report = DryRunHarness::run(&gate, &injected);

        assert!(!report.success);
        let reason = report.reason.expect("blocked simulation");
        assert!(reason.contains("10"));
        assert!(reason.contains("OFFLINE"));
        assert_eq!(probe_captures.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn report_trail_covers_every_bound_rule() {
        let gate: Gate<(), ()> = GateBuilder::new(StateSnapshot::new)
            .rule(BatteryMin::new(15.0))
            .rule(RequireConnectivity::new("BLE"))
            .operation(|(): ()| ());

        let injected = StateSnapshot::new().with("battery", 50.0);
        let report = DryRunHarness::run(&gate, &injected);

        assert!(!report.success);
        assert_eq!(report.evaluated.len(), 2);
        assert!(report.evaluated[0].is_pass());
        assert!(!report.evaluated[1].is_pass());
    }
}
