//! Property tests for the engine's aggregation invariants.

use crate::engine::evaluate;
use crate::rule::Rule;
use crate::test_support::{failing, passing, snapshot};
use proptest::prelude::*;

fn rules_from_outcomes(outcomes: &[bool]) -> Vec<Box<dyn Rule>> {
    outcomes
        .iter()
        .enumerate()
        .map(|(index, pass)| {
            if *pass {
                passing(index)
            } else {
                failing(index, "violated")
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn allowed_iff_every_rule_passes(outcomes in prop::collection::vec(any::<bool>(), 0..8)) {
        let rules = rules_from_outcomes(&outcomes);
        let decision = evaluate(&rules, &snapshot(&[]));

        prop_assert_eq!(decision.allowed, outcomes.iter().all(|pass| *pass));
        prop_assert_eq!(decision.evaluated.len(), outcomes.len());
    }

    #[test]
    fn first_failure_is_the_earliest_declared(outcomes in prop::collection::vec(any::<bool>(), 0..8)) {
        let rules = rules_from_outcomes(&outcomes);
        let decision = evaluate(&rules, &snapshot(&[]));

        match outcomes.iter().position(|pass| !*pass) {
            None => prop_assert!(decision.first_failure.is_none()),
            Some(index) => {
                let first = decision.first_failure.as_ref().expect("first failure");
                prop_assert_eq!(first.rule_id.as_str(), rules[index].id());
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic(outcomes in prop::collection::vec(any::<bool>(), 0..8)) {
        let rules = rules_from_outcomes(&outcomes);
        let state = snapshot(&[("battery", 42.0.into())]);

        prop_assert_eq!(evaluate(&rules, &state), evaluate(&rules, &state));
    }
}
