//! Report serialization, parsing, renderable conversion, and exit codes.

use anyhow::Context;
use sideguard_render::{RenderableData, RenderableDecision, RenderableReport, RenderableRule};
use sideguard_types::{
    ids, SideguardData, SideguardReport, SimulationReport, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<SideguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if !schema.is_empty() && schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    let report: SideguardReport =
        serde_json::from_value(value).context("parse sideguard report")?;
    Ok(report)
}

pub fn serialize_report(report: &SideguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &SideguardReport) -> RenderableReport {
    RenderableReport {
        decision: if report.decision.success {
            RenderableDecision::Allowed
        } else {
            RenderableDecision::Blocked
        },
        reason: report.decision.reason.clone(),
        suggestion: report.decision.suggestion.clone(),
        rules: report
            .decision
            .evaluated
            .iter()
            .map(|result| RenderableRule {
                rule_id: result.rule_id.clone(),
                passed: result.is_pass(),
                reason: result.verdict.reason().map(str::to_string),
                suggestion: result.verdict.suggestion().map(str::to_string),
            })
            .collect(),
        data: RenderableData {
            rules_evaluated: report.data.rules_evaluated,
            state_keys: report.data.state_keys,
        },
    }
}

/// A report for a tool-level failure (unreadable state file, bad config):
/// blocked, with the error message as the reason.
pub fn runtime_error_report(message: &str) -> SideguardReport {
    let now = OffsetDateTime::now_utc();
    SideguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "sideguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        decision: SimulationReport {
            success: false,
            reason: Some(format!("{}: {message}", ids::CODE_RUNTIME_ERROR)),
            suggestion: Some("Fix the tool error and re-run sideguard.".to_string()),
            evaluated: Vec::new(),
        },
        data: SideguardData {
            on_fail: "unknown".to_string(),
            rules_bound: 0,
            rules_evaluated: 0,
            state_keys: 0,
        },
    }
}

/// Map a decision to an exit code: 0 = allowed, 2 = blocked.
pub fn decision_exit_code(report: &SideguardReport) -> i32 {
    if report.decision.success {
        0
    } else {
        2
    }
}
