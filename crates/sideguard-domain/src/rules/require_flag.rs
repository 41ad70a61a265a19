use crate::rule::{missing_key, Rule};
use sideguard_types::{ids, StateSnapshot, Verdict};

/// Pass iff a configured boolean state key is present and true.
///
/// Covers deployment-specific interlocks (an `armed` switch, an operator
/// acknowledgement) without a dedicated rule type per flag.
#[derive(Clone, Debug)]
pub struct RequireFlag {
    key: String,
}

impl RequireFlag {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Rule for RequireFlag {
    fn id(&self) -> &'static str {
        ids::RULE_REQUIRE_FLAG
    }

    fn evaluate(&self, snapshot: &StateSnapshot) -> Verdict {
        let suggestion = format!("Set the '{}' flag to true before retrying.", self.key);

        if !snapshot.contains(&self.key) {
            return missing_key(&self.key, suggestion);
        }

        match snapshot.flag(&self.key) {
            Some(true) => Verdict::Pass,
            _ => Verdict::fail(format!("flag '{}' is not set", self.key), suggestion),
        }
    }
}
