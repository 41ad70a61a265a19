//! The interceptor: binds rules, policy, probe, and the wrapped operation.

use crate::policy::{GuardViolation, OnFail};
use crate::probe::StateProbe;
use sideguard_domain::Rule;
use sideguard_types::{GuardDecision, RejectionPayload, StateSnapshot};

/// The result of one guarded invocation that did not raise.
#[derive(Debug)]
pub enum GuardOutcome<T> {
    /// Every rule passed; the wrapped operation ran and this is its result,
    /// unmodified.
    Executed(T),
    /// A rule failed under the `Return` policy; the operation did not run.
    Rejected(RejectionPayload),
    /// A rule failed under a `Handler` policy; this is the handler's result.
    Handled(T),
}

impl<T> GuardOutcome<T> {
    pub fn is_executed(&self) -> bool {
        matches!(self, GuardOutcome::Executed(_))
    }

    pub fn into_executed(self) -> Option<T> {
        match self {
            GuardOutcome::Executed(value) => Some(value),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionPayload> {
        match self {
            GuardOutcome::Rejected(payload) => Some(payload),
            _ => None,
        }
    }
}

/// A guarded operation: ordered rules, one failure policy, a state probe,
/// and the wrapped side-effecting callable.
///
/// Guarantee: the wrapped operation is invoked at most once per call, and
/// never when the decision is blocked — no partial execution, no rollback,
/// because the gate is strictly check-then-call.
pub struct Gate<A, T> {
    rules: Vec<Box<dyn Rule>>,
    policy: OnFail<T>,
    probe: Box<dyn StateProbe>,
    operation: Box<dyn FnMut(A) -> T>,
}

impl<A, T> Gate<A, T> {
    /// Run the decision path only: evaluate the bound rules against a
    /// snapshot. No side effects; shared by [`Gate::invoke`] and the dry-run
    /// harness.
    pub fn decide(&self, snapshot: &StateSnapshot) -> GuardDecision {
        sideguard_domain::evaluate(&self.rules, snapshot)
    }

    /// Invoke the guarded operation.
    ///
    /// Captures a snapshot exclusive to this call, evaluates the rules, and
    /// either executes the wrapped operation with `args` or applies the bound
    /// failure policy. Only the `Raise` policy produces an `Err`.
    pub fn invoke(&mut self, args: A) -> Result<GuardOutcome<T>, GuardViolation> {
        let snapshot = self.probe.capture();
        let decision = self.decide(&snapshot);

        match decision.rejection() {
            None => Ok(GuardOutcome::Executed((self.operation)(args))),
            Some(payload) => match &self.policy {
                OnFail::Raise => Err(GuardViolation { payload, decision }),
                OnFail::Return => Ok(GuardOutcome::Rejected(payload)),
                OnFail::Handler(handler) => Ok(GuardOutcome::Handled(handler(&decision))),
            },
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }
}

/// Explicit builder for a [`Gate`]: rule sequence, policy, and probe are
/// assembled first; binding the operation finalizes the gate.
pub struct GateBuilder<T> {
    rules: Vec<Box<dyn Rule>>,
    policy: OnFail<T>,
    probe: Box<dyn StateProbe>,
}

impl<T> GateBuilder<T> {
    /// Start a builder around a state probe. The probe is the one required
    /// collaborator: a gate without telemetry cannot decide anything.
    pub fn new(probe: impl StateProbe + 'static) -> Self {
        GateBuilder {
            rules: Vec::new(),
            policy: OnFail::Return,
            probe: Box::new(probe),
        }
    }

    /// Append one rule. Declaration order is evaluation order.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append a pre-built rule sequence, preserving its order.
    pub fn rules(mut self, rules: Vec<Box<dyn Rule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Select the failure policy. Defaults to [`OnFail::Return`].
    pub fn on_fail(mut self, policy: OnFail<T>) -> Self {
        self.policy = policy;
        self
    }

    /// Bind the wrapped operation and finalize the gate.
    pub fn operation<A>(self, operation: impl FnMut(A) -> T + 'static) -> Gate<A, T> {
        Gate {
            rules: self.rules,
            policy: self.policy,
            probe: self.probe,
            operation: Box::new(operation),
        }
    }
}
