//! Shared test utilities for the sideguard workspace.
//!
//! Fixture tests compare emitted report envelopes against checked-in golden
//! files; the fields that differ from run to run are replaced with fixed
//! placeholders first.

use serde_json::{json, Value};

pub const PLACEHOLDER_TIMESTAMP: &str = "__TIMESTAMP__";
pub const PLACEHOLDER_VERSION: &str = "__VERSION__";

/// Keys holding per-run capture times, scrubbed at any depth. Their
/// placeholder value is fixed and cannot collide with real data.
const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// The root keys that identify a report envelope.
const ENVELOPE_KEYS: [&str; 4] = ["schema", "tool", "decision", "data"];

/// Replace the non-deterministic fields of a report with placeholders.
///
/// `tool.version` is only replaced when the *root* object is a report
/// envelope (all of [`ENVELOPE_KEYS`] present), so an envelope-shaped object
/// nested somewhere in rule data is left alone. Timestamps are scrubbed
/// recursively.
pub fn normalize_report(mut value: Value) -> Value {
    if let Some(root) = value.as_object_mut() {
        let is_envelope = ENVELOPE_KEYS.iter().all(|key| root.contains_key(*key));
        if is_envelope {
            if let Some(tool) = root.get_mut("tool").and_then(Value::as_object_mut) {
                if tool.contains_key("version") {
                    tool.insert("version".to_string(), json!(PLACEHOLDER_VERSION));
                }
            }
        }
    }
    scrub_timestamps(&mut value);
    value
}

fn scrub_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if map.contains_key(key) {
                    map.insert(key.to_string(), json!(PLACEHOLDER_TIMESTAMP));
                }
            }
            map.values_mut().for_each(scrub_timestamps);
        }
        Value::Array(items) => items.iter_mut().for_each(scrub_timestamps),
        _ => {}
    }
}
