use crate::rule::{missing_key, Rule};
use sideguard_types::{ids, StateSnapshot, Verdict};

/// The snapshot key this rule reads.
pub const KEY_BATTERY: &str = "battery";

/// Pass iff the reported battery charge is at least the configured minimum.
#[derive(Clone, Debug)]
pub struct BatteryMin {
    min: f64,
}

impl BatteryMin {
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Rule for BatteryMin {
    fn id(&self) -> &'static str {
        ids::RULE_BATTERY_MIN
    }

    fn evaluate(&self, snapshot: &StateSnapshot) -> Verdict {
        let Some(observed) = snapshot.number(KEY_BATTERY) else {
            return missing_key(
                KEY_BATTERY,
                "Verify the battery telemetry source before retrying.",
            );
        };

        if observed >= self.min {
            Verdict::Pass
        } else {
            Verdict::fail(
                format!(
                    "battery at {observed}% is below the required minimum of {}%",
                    self.min
                ),
                format!("Recharge to at least {}% before retrying.", self.min),
            )
        }
    }
}
