use crate::rule::Rule;
use sideguard_types::{ids, StateSnapshot, Verdict};

/// The snapshot key this rule reads.
pub const KEY_CONNECTION: &str = "connection";

/// The generic connected state that satisfies any required protocol.
const ONLINE: &str = "online";

/// Pass iff the snapshot's connection state is reachable for the required
/// protocol.
///
/// Reachable means the observed state names the protocol itself
/// (case-insensitive) or is the generic connected state `online`. `offline`,
/// `degraded`, and mismatched protocols fail. A snapshot without a
/// `connection` key is treated as OFFLINE.
#[derive(Clone, Debug)]
pub struct RequireConnectivity {
    protocol: String,
}

impl RequireConnectivity {
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
        }
    }

    fn suggestion(&self) -> String {
        format!(
            "Re-establish the {} link before retrying.",
            self.protocol.to_uppercase()
        )
    }
}

impl Rule for RequireConnectivity {
    fn id(&self) -> &'static str {
        ids::RULE_REQUIRE_CONNECTIVITY
    }

    fn evaluate(&self, snapshot: &StateSnapshot) -> Verdict {
        let Some(observed) = snapshot.text(KEY_CONNECTION) else {
            return Verdict::fail(
                format!(
                    "state key '{KEY_CONNECTION}' is missing from the snapshot; assuming OFFLINE"
                ),
                self.suggestion(),
            );
        };

        if observed.eq_ignore_ascii_case(&self.protocol) || observed.eq_ignore_ascii_case(ONLINE) {
            Verdict::Pass
        } else {
            Verdict::fail(
                format!(
                    "required connectivity {} is not reachable; found: {}",
                    self.protocol.to_uppercase(),
                    observed.to_uppercase()
                ),
                self.suggestion(),
            )
        }
    }
}
