//! Explain registry for rules and codes.
//!
//! Maps rule IDs and failure codes to human-readable explanations with
//! remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to clear violations.
    pub remediation: &'static str,
    /// Before/after state examples.
    pub examples: ExamplePair,
}

/// Before and after state examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A snapshot that would be blocked.
    pub before: &'static str,
    /// A snapshot that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try rule_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_BATTERY_MIN => Some(explain_battery_min()),
        ids::RULE_MAX_TEMP => Some(explain_max_temp()),
        ids::RULE_REQUIRE_CONNECTIVITY => Some(explain_require_connectivity()),
        ids::RULE_REQUIRE_FLAG => Some(explain_require_flag()),

        // Codes
        ids::CODE_BATTERY_BELOW_MIN => Some(explain_battery_below_min()),
        ids::CODE_TEMP_ABOVE_MAX => Some(explain_temp_above_max()),
        ids::CODE_CONNECTIVITY_MISMATCH => Some(explain_connectivity_mismatch()),
        ids::CODE_FLAG_UNSET => Some(explain_flag_unset()),
        ids::CODE_MISSING_STATE_KEY => Some(explain_missing_state_key()),
        ids::CODE_SAFETY_BLOCK => Some(explain_safety_block()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_BATTERY_MIN,
        ids::RULE_MAX_TEMP,
        ids::RULE_REQUIRE_CONNECTIVITY,
        ids::RULE_REQUIRE_FLAG,
    ]
}

/// List all known failure codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_BATTERY_BELOW_MIN,
        ids::CODE_TEMP_ABOVE_MAX,
        ids::CODE_CONNECTIVITY_MISMATCH,
        ids::CODE_FLAG_UNSET,
        ids::CODE_MISSING_STATE_KEY,
    ]
}

// --- Rule-level explanations ---

fn explain_battery_min() -> Explanation {
    Explanation {
        title: "Minimum Battery",
        description: "\
Blocks an operation when the reported battery charge is below a configured
minimum.

Running an effectful operation on a nearly-empty battery is risky because:
- The device can power off mid-operation, leaving hardware in an undefined pose
- A partial operation may need manual recovery on site
- Brown-outs corrupt in-flight writes on some controllers

A snapshot without a `battery` reading is treated as a violation, not a pass:
if the telemetry is broken, the guard assumes the worst.",
        remediation: "\
Charge the device above the configured minimum before retrying, or lower the
threshold in sideguard.toml if it is stricter than the hardware requires:

    [rules.battery_min]
    min = 15.0",
        examples: ExamplePair {
            before: r#"{ "battery": 10, "connection": "ble" }"#,
            after: r#"{ "battery": 80, "connection": "ble" }"#,
        },
    }
}

fn explain_max_temp() -> Explanation {
    Explanation {
        title: "Maximum Temperature",
        description: "\
Blocks an operation when the reported temperature exceeds a configured
maximum.

Actuating overheated hardware accelerates wear and can trip thermal cutoffs
mid-operation. A snapshot without a `temperature` reading is treated as a
violation: a silent sensor is indistinguishable from a broken one.",
        remediation: "\
Let the device cool below the configured maximum before retrying, and check
the temperature sensor if readings are missing:

    [rules.max_temp]
    max = 80.0",
        examples: ExamplePair {
            before: r#"{ "temperature": 95 }"#,
            after: r#"{ "temperature": 55 }"#,
        },
    }
}

fn explain_require_connectivity() -> Explanation {
    Explanation {
        title: "Required Connectivity",
        description: "\
Blocks an operation unless the snapshot's `connection` state is reachable for
the required protocol.

The observed state passes when it names the required protocol itself
(case-insensitive) or is the generic connected state `online`. `offline`,
`degraded`, and mismatched protocols are blocked: an operation that needs a
BLE link must not fire over a WiFi-only or dead connection.

A snapshot without a `connection` key is treated as OFFLINE.",
        remediation: "\
Re-establish the required link before retrying, or configure the protocol the
deployment actually uses:

    [rules.require_connectivity]
    protocol = \"BLE\"",
        examples: ExamplePair {
            before: r#"{ "battery": 80, "connection": "offline" }"#,
            after: r#"{ "battery": 80, "connection": "ble" }"#,
        },
    }
}

fn explain_require_flag() -> Explanation {
    Explanation {
        title: "Required Flag",
        description: "\
Blocks an operation unless a configured boolean state key is present and
true.

This is the catch-all for deployment-specific interlocks (an `armed` switch,
a maintenance-mode latch, an operator acknowledgement). A missing or
non-boolean value is a violation.",
        remediation: "\
Set the flag in the telemetry source before retrying, or point the rule at
the key your deployment publishes:

    [rules.require_flag]
    key = \"armed\"",
        examples: ExamplePair {
            before: r#"{ "armed": false }"#,
            after: r#"{ "armed": true }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_battery_below_min() -> Explanation {
    // Same as the rule, but framed as the specific code
    let mut exp = explain_battery_min();
    exp.title = "Battery Below Minimum";
    exp
}

fn explain_temp_above_max() -> Explanation {
    let mut exp = explain_max_temp();
    exp.title = "Temperature Above Maximum";
    exp
}

fn explain_connectivity_mismatch() -> Explanation {
    let mut exp = explain_require_connectivity();
    exp.title = "Connectivity Mismatch";
    exp
}

fn explain_flag_unset() -> Explanation {
    let mut exp = explain_require_flag();
    exp.title = "Flag Unset";
    exp
}

fn explain_missing_state_key() -> Explanation {
    Explanation {
        title: "Missing State Key",
        description: "\
A rule's required key is absent from the snapshot.

Absence is always a violation, never a pass: a guard that waves an operation
through because its telemetry went silent is not guarding anything. The
failure reason names the missing key so the caller can distinguish broken
telemetry from a genuinely bad reading.",
        remediation: "\
Check the telemetry source feeding the state probe. Every rule bound to a
guard declares the keys it reads; the capture function must publish them all.",
        examples: ExamplePair {
            before: r#"{ "connection": "ble" }"#,
            after: r#"{ "battery": 80, "connection": "ble" }"#,
        },
    }
}

fn explain_safety_block() -> Explanation {
    Explanation {
        title: "Safety Block",
        description: "\
The fixed rejection code carried by every structured rejection payload.

When a guarded operation is blocked, the caller receives
`{ \"status\": \"error\", \"code\": \"SAFETY_BLOCK\", \"reason\", \"suggestion\" }`
instead of the operation's result. The reason aggregates every violated
constraint from the evaluation in declaration order.",
        remediation: "\
Read the payload's `reason` for the violated constraints and `suggestion` for
the first remediation step, fix the state, and retry the operation.",
        examples: ExamplePair {
            before: r#"{ "battery": 10, "connection": "offline" }"#,
            after: r#"{ "battery": 80, "connection": "ble" }"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_rule_id() {
        assert!(lookup_explanation(ids::RULE_BATTERY_MIN).is_some());
        assert!(lookup_explanation(ids::RULE_MAX_TEMP).is_some());
        assert!(lookup_explanation(ids::RULE_REQUIRE_CONNECTIVITY).is_some());
        assert!(lookup_explanation(ids::RULE_REQUIRE_FLAG).is_some());
    }

    #[test]
    fn lookup_by_code() {
        assert!(lookup_explanation(ids::CODE_BATTERY_BELOW_MIN).is_some());
        assert!(lookup_explanation(ids::CODE_TEMP_ABOVE_MAX).is_some());
        assert!(lookup_explanation(ids::CODE_CONNECTIVITY_MISMATCH).is_some());
        assert!(lookup_explanation(ids::CODE_FLAG_UNSET).is_some());
        assert!(lookup_explanation(ids::CODE_MISSING_STATE_KEY).is_some());
        assert!(lookup_explanation(ids::CODE_SAFETY_BLOCK).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown.rule").is_none());
        assert!(lookup_explanation("unknown_code").is_none());
    }

    #[test]
    fn all_rule_ids_are_valid() {
        for id in all_rule_ids() {
            assert!(
                lookup_explanation(id).is_some(),
                "rule_id {} should be in registry",
                id
            );
        }
    }

    #[test]
    fn all_codes_are_valid() {
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "code {} should be in registry",
                code
            );
        }
    }
}
