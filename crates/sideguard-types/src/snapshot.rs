//! The immutable state snapshot rules evaluate against.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single telemetry value inside a snapshot.
///
/// The set is intentionally small: booleans, numbers, and short text values
/// (connection states, modes) cover the telemetry a guard inspects. JSON maps
/// onto it without any tagging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        StateValue::Number(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Number(value as f64)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Text(value)
    }
}

/// An immutable capture of relevant system state at one evaluation instant.
///
/// Owned per invocation: captured fresh from the live system or injected by
/// the dry-run harness, and never mutated after capture. Every rule in one
/// evaluation observes the same snapshot, so concurrently changing telemetry
/// cannot produce a time-of-check/time-of-use race inside the guard.
///
/// Absence of a key is data, not an error: the typed accessors return
/// `Option` and rules turn `None` into a failure naming the missing key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct StateSnapshot(BTreeMap<String, StateValue>);

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion used while assembling a capture.
    pub fn with(mut self, key: &str, value: impl Into<StateValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Numeric value under `key`, or `None` if absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(StateValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Text value under `key`, or `None` if absent or not text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(StateValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Boolean value under `key`, or `None` if absent or not a boolean.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(StateValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, StateValue>> for StateSnapshot {
    fn from(map: BTreeMap<String, StateValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, StateValue)> for StateSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, StateValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
