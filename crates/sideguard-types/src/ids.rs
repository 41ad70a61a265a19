//! Stable identifiers for rules and rejection codes.
//!
//! `rule_id` is a dotted namespace. Failure codes are short snake_case
//! discriminators used by the explain registry. The wire-level rejection code
//! is the single fixed `SAFETY_BLOCK`.

// Rules
pub const RULE_BATTERY_MIN: &str = "state.battery_min";
pub const RULE_MAX_TEMP: &str = "state.max_temp";
pub const RULE_REQUIRE_CONNECTIVITY: &str = "state.require_connectivity";
pub const RULE_REQUIRE_FLAG: &str = "state.require_flag";

// Codes: state.battery_min
pub const CODE_BATTERY_BELOW_MIN: &str = "battery_below_min";

// Codes: state.max_temp
pub const CODE_TEMP_ABOVE_MAX: &str = "temp_above_max";

// Codes: state.require_connectivity
pub const CODE_CONNECTIVITY_MISMATCH: &str = "connectivity_mismatch";

// Codes: state.require_flag
pub const CODE_FLAG_UNSET: &str = "flag_unset";

// Shared: a rule's required key is absent from the snapshot
pub const CODE_MISSING_STATE_KEY: &str = "missing_state_key";

// Wire-level rejection discriminator
pub const CODE_SAFETY_BLOCK: &str = "SAFETY_BLOCK";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
