use crate::rule::Rule;
use sideguard_types::{EvaluationResult, GuardDecision, StateSnapshot};

/// Evaluate an ordered rule set against one snapshot.
///
/// Every rule is evaluated in declaration order against the same snapshot —
/// no short-circuit — so a single rejection can report all violated
/// constraints, not just the first: a caller fixing "battery" alone should
/// also learn about "offline" in the same cycle rather than discovering it on
/// a second attempt. `first_failure` is the earliest failure in declaration
/// order; there is no reordering by severity or any other key.
///
/// Identical `(rules, snapshot)` input always yields an identical decision.
/// Rule totality is a precondition (see [`Rule`]); a panicking rule is an
/// authoring defect and propagates unmasked.
pub fn evaluate(rules: &[Box<dyn Rule>], snapshot: &StateSnapshot) -> GuardDecision {
    let mut evaluated = Vec::with_capacity(rules.len());
    for rule in rules {
        evaluated.push(EvaluationResult {
            rule_id: rule.id().to_string(),
            verdict: rule.evaluate(snapshot),
        });
    }
    GuardDecision::from_results(evaluated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BatteryMin, RequireConnectivity};
    use crate::test_support::{failing, passing, snapshot};
    use sideguard_types::ids;

    #[test]
    fn empty_rule_set_is_vacuously_allowed() {
        let decision = evaluate(&[], &snapshot(&[]));
        assert!(decision.allowed);
        assert!(decision.evaluated.is_empty());
        assert!(decision.first_failure.is_none());
    }

    #[test]
    fn every_rule_is_evaluated_even_after_a_failure() {
        let rules: Vec<Box<dyn Rule>> = vec![
            failing(0, "first broke"),
            passing(1),
            failing(2, "third broke"),
        ];
        let decision = evaluate(&rules, &snapshot(&[]));

        assert!(!decision.allowed);
        assert_eq!(decision.evaluated.len(), 3);
        assert!(!decision.evaluated[0].is_pass());
        assert!(decision.evaluated[1].is_pass());
        assert!(!decision.evaluated[2].is_pass());
    }

    #[test]
    fn first_failure_follows_declaration_order() {
        let rules: Vec<Box<dyn Rule>> = vec![passing(0), failing(1, "one"), failing(2, "two")];
        let decision = evaluate(&rules, &snapshot(&[]));

        let first = decision.first_failure.as_ref().expect("first failure");
        assert_eq!(first.rule_id, decision.evaluated[1].rule_id);
        assert_eq!(first.verdict.reason(), Some("one"));
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(BatteryMin::new(15.0)),
            Box::new(RequireConnectivity::new("BLE")),
        ];
        let state = snapshot(&[("battery", 10.0.into()), ("connection", "offline".into())]);

        let first = evaluate(&rules, &state);
        let second = evaluate(&rules, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn trail_preserves_rule_identity() {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(BatteryMin::new(15.0)),
            Box::new(RequireConnectivity::new("BLE")),
        ];
        let state = snapshot(&[("battery", 50.0.into()), ("connection", "ble".into())]);

        let decision = evaluate(&rules, &state);
        assert!(decision.allowed);
        assert_eq!(decision.evaluated[0].rule_id, ids::RULE_BATTERY_MIN);
        assert_eq!(decision.evaluated[1].rule_id, ids::RULE_REQUIRE_CONNECTIVITY);
    }
}
