use crate::rule::{missing_key, Rule};
use sideguard_types::{ids, StateSnapshot, Verdict};

/// The snapshot key this rule reads.
pub const KEY_TEMPERATURE: &str = "temperature";

/// Pass iff the reported temperature does not exceed the configured maximum.
///
/// A silent sensor fails safe: no reading is treated as overheating.
#[derive(Clone, Debug)]
pub struct MaxTemp {
    max: f64,
}

impl MaxTemp {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Rule for MaxTemp {
    fn id(&self) -> &'static str {
        ids::RULE_MAX_TEMP
    }

    fn evaluate(&self, snapshot: &StateSnapshot) -> Verdict {
        let Some(observed) = snapshot.number(KEY_TEMPERATURE) else {
            return missing_key(
                KEY_TEMPERATURE,
                "Verify the temperature sensor before retrying.",
            );
        };

        if observed <= self.max {
            Verdict::Pass
        } else {
            Verdict::fail(
                format!(
                    "temperature at {observed} exceeds the allowed maximum of {}",
                    self.max
                ),
                format!("Let the device cool below {} before retrying.", self.max),
            )
        }
    }
}
