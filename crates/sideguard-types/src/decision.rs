//! Verdicts, decisions, and the structured rejection payload.

use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed `status` discriminator of every [`RejectionPayload`].
pub const STATUS_ERROR: &str = "error";

/// The outcome of evaluating one rule against one snapshot.
///
/// A failure always carries a human-readable reason and an actionable
/// remediation suggestion: the agent consuming a rejection needs an
/// explainable message, not a stack trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail { reason: String, suggestion: String },
}

impl Verdict {
    pub fn fail(reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Verdict::Fail {
            reason: reason.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail { reason, .. } => Some(reason),
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail { suggestion, .. } => Some(suggestion),
        }
    }
}

/// One rule's contribution to the audit trail of a guard invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    pub rule_id: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl EvaluationResult {
    pub fn is_pass(&self) -> bool {
        self.verdict.is_pass()
    }
}

/// The immutable outcome of one guard invocation.
///
/// Invariant: `allowed == true` iff every entry in `evaluated` is a pass.
/// `first_failure` is the earliest failure in declaration order; declaration
/// order is the single source of ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuardDecision {
    pub allowed: bool,
    pub evaluated: Vec<EvaluationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_failure: Option<EvaluationResult>,
}

impl GuardDecision {
    /// Fold an ordered evaluation trail into a decision, upholding the
    /// `allowed`/`first_failure` invariants.
    pub fn from_results(evaluated: Vec<EvaluationResult>) -> Self {
        let first_failure = evaluated.iter().find(|r| !r.is_pass()).cloned();
        GuardDecision {
            allowed: first_failure.is_none(),
            evaluated,
            first_failure,
        }
    }

    /// The structured rejection for a blocked decision, `None` when allowed.
    ///
    /// The payload reason aggregates every failed rule's reason in
    /// declaration order, so one rejection reports all violated constraints;
    /// the suggestion is the first failure's remediation.
    pub fn rejection(&self) -> Option<RejectionPayload> {
        let first = self.first_failure.as_ref()?;
        let reasons: Vec<&str> = self
            .evaluated
            .iter()
            .filter_map(|r| r.verdict.reason())
            .collect();
        Some(RejectionPayload {
            status: STATUS_ERROR.to_string(),
            code: ids::CODE_SAFETY_BLOCK.to_string(),
            reason: reasons.join("; "),
            suggestion: first.verdict.suggestion().unwrap_or_default().to_string(),
        })
    }
}

/// The externally visible structured rejection. Field set is fixed; this is
/// the wire shape an agent loop parses and feeds back to the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RejectionPayload {
    pub status: String,
    pub code: String,
    pub reason: String,
    pub suggestion: String,
}

/// The dry-run result shape: the decision with execution suppressed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimulationReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub evaluated: Vec<EvaluationResult>,
}

impl SimulationReport {
    pub fn from_decision(decision: &GuardDecision) -> Self {
        let rejection = decision.rejection();
        SimulationReport {
            success: decision.allowed,
            reason: rejection.as_ref().map(|p| p.reason.clone()),
            suggestion: rejection.map(|p| p.suggestion),
            evaluated: decision.evaluated.clone(),
        }
    }
}
