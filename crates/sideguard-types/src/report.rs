//! Report envelope emitted by the CLI simulate surface.

use crate::decision::SimulationReport;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for sideguard reports.
pub const SCHEMA_REPORT_V1: &str = "sideguard.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Sideguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct SideguardData {
    /// The failure policy the rule set was bound with (`return` or `raise`).
    pub on_fail: String,

    pub rules_bound: u32,
    pub rules_evaluated: u32,

    /// Number of keys in the injected snapshot.
    pub state_keys: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows sideguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = SideguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub decision: SimulationReport,
    pub data: TData,
}

pub type SideguardReport = ReportEnvelope<SideguardData>;
