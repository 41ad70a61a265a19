//! The rule contract.

use sideguard_types::{StateSnapshot, Verdict};

/// A pure predicate over a state snapshot.
///
/// The contract every implementation must uphold:
///
/// - **Pure**: no side effects, no interior mutability observable across
///   calls.
/// - **Deterministic**: the same snapshot always yields the same verdict.
/// - **Total**: never panics for well-formed input. A missing or
///   wrongly-typed required key is a [`Verdict::Fail`] whose reason names the
///   key, never a crash. A rule that panics is an authoring defect and
///   propagates unmasked; the engine does not defend against it.
///
/// Rules are constructed once, parameterized by domain constants (a
/// threshold, a protocol name), and reused across every invocation.
pub trait Rule: Send + Sync {
    /// Stable dotted identifier, e.g. `state.battery_min`.
    fn id(&self) -> &'static str;

    /// Evaluate this rule against one snapshot.
    fn evaluate(&self, snapshot: &StateSnapshot) -> Verdict;
}

/// The shared failure for a required key that is absent from the snapshot.
pub(crate) fn missing_key(key: &str, suggestion: impl Into<String>) -> Verdict {
    Verdict::fail(
        format!("state key '{key}' is missing from the snapshot"),
        suggestion,
    )
}
