use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `sideguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Every rule section is optional; an absent section
/// means the rule is not bound.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SideguardConfigV1 {
    /// Optional schema string for tooling (`sideguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// What happens on rejection: `return` (default) or `raise`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_fail: Option<String>,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// One optional section per built-in rule. Field order here is the binding
/// order of the resulting rule set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RulesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_min: Option<BatteryMinConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<MaxTempConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_connectivity: Option<RequireConnectivityConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_flag: Option<RequireFlagConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatteryMinConfig {
    /// Minimum battery charge, in percent.
    pub min: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MaxTempConfig {
    /// Maximum temperature reading.
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequireConnectivityConfig {
    /// Required protocol, e.g. `BLE` or `WIFI`. Matched case-insensitively.
    pub protocol: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequireFlagConfig {
    /// The boolean state key that must be present and true.
    pub key: String,
}
