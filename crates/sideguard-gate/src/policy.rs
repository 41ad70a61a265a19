//! Failure policies and the raised fault type.

use sideguard_types::{GuardDecision, RejectionPayload};
use std::fmt;
use thiserror::Error;

/// What happens when a guarded invocation is blocked.
///
/// One policy applies per gate; it is fixed at binding time, not per call.
pub enum OnFail<T> {
    /// Surface a [`GuardViolation`] fault that unwinds the caller's
    /// invocation. For embedding environments (unit tests, CI) that should
    /// halt loudly on a violation.
    Raise,
    /// Yield the [`RejectionPayload`] as the call's result, no unwind. The
    /// default: production agent loops expect a parseable rejection to feed
    /// back to the model.
    Return,
    /// Invoke a caller-supplied callback with the full decision and yield its
    /// result. For bespoke logging/telemetry hooks.
    Handler(Box<dyn Fn(&GuardDecision) -> T + Send + Sync>),
}

impl<T> OnFail<T> {
    pub fn handler(callback: impl Fn(&GuardDecision) -> T + Send + Sync + 'static) -> Self {
        OnFail::Handler(Box::new(callback))
    }
}

impl<T> fmt::Debug for OnFail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnFail::Raise => f.write_str("Raise"),
            OnFail::Return => f.write_str("Return"),
            OnFail::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// The configurable subset of [`OnFail`]: the policies a config file can
/// name. Handler policies are a programmatic binding only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnFailKind {
    Raise,
    Return,
}

impl OnFailKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OnFailKind::Raise => "raise",
            OnFailKind::Return => "return",
        }
    }

    pub fn bind<T>(self) -> OnFail<T> {
        match self {
            OnFailKind::Raise => OnFail::Raise,
            OnFailKind::Return => OnFail::Return,
        }
    }
}

/// The fault raised by the `Raise` policy.
///
/// Carries the same payload the `Return` policy would have produced for
/// identical input, plus the full decision for inspection.
#[derive(Debug, Clone, Error)]
#[error("{}", .payload.reason)]
pub struct GuardViolation {
    pub payload: RejectionPayload,
    pub decision: GuardDecision,
}
