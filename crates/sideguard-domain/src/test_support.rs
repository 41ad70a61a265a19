//! Shared helpers for domain tests: stub rules with fixed verdicts and a
//! snapshot builder.

use crate::rule::Rule;
use sideguard_types::{StateSnapshot, StateValue, Verdict};

/// Stable identities for stub rules, indexed by declaration position.
pub(crate) const STUB_IDS: [&str; 8] = [
    "test.rule_0",
    "test.rule_1",
    "test.rule_2",
    "test.rule_3",
    "test.rule_4",
    "test.rule_5",
    "test.rule_6",
    "test.rule_7",
];

pub(crate) struct StubRule {
    id: &'static str,
    verdict: Verdict,
}

impl Rule for StubRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn evaluate(&self, _snapshot: &StateSnapshot) -> Verdict {
        self.verdict.clone()
    }
}

pub(crate) fn passing(index: usize) -> Box<dyn Rule> {
    Box::new(StubRule {
        id: STUB_IDS[index],
        verdict: Verdict::Pass,
    })
}

pub(crate) fn failing(index: usize, reason: &str) -> Box<dyn Rule> {
    Box::new(StubRule {
        id: STUB_IDS[index],
        verdict: Verdict::fail(reason, format!("fix {reason}")),
    })
}

pub(crate) fn snapshot(entries: &[(&str, StateValue)]) -> StateSnapshot {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
