//! Stable DTOs and IDs used across the sideguard workspace.
//!
//! This crate is intentionally boring:
//! - the state snapshot vocabulary rules evaluate against
//! - verdicts, decisions, and the structured rejection payload
//! - data types for the emitted report envelope
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod decision;
pub mod explain;
pub mod ids;
pub mod report;
pub mod snapshot;

pub use decision::{
    EvaluationResult, GuardDecision, RejectionPayload, SimulationReport, Verdict, STATUS_ERROR,
};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{ReportEnvelope, SideguardData, SideguardReport, ToolMeta, SCHEMA_REPORT_V1};
pub use snapshot::{StateSnapshot, StateValue};
