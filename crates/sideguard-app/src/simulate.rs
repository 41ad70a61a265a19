//! The `simulate` use case: dry-run a configured rule set against an
//! injected snapshot and produce a report envelope.

use anyhow::Context;
use sideguard_gate::{DryRunHarness, GateBuilder};
use sideguard_settings::Overrides;
use sideguard_types::{
    SideguardData, SideguardReport, StateSnapshot, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the simulate use case.
#[derive(Clone, Debug)]
pub struct SimulateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// The injected state snapshot, as a JSON object.
    pub state_json: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the simulate use case.
#[derive(Clone, Debug)]
pub struct SimulateOutput {
    /// The generated report.
    pub report: SideguardReport,
}

/// Run the simulate use case: parse config, resolve the binding, bind a gate
/// around a stub operation, dry-run the injected snapshot, wrap the decision
/// in a report envelope.
pub fn run_simulate(input: SimulateInput<'_>) -> anyhow::Result<SimulateOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        sideguard_settings::SideguardConfigV1::default()
    } else {
        sideguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = sideguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let snapshot: StateSnapshot =
        serde_json::from_str(input.state_json).context("parse state snapshot")?;

    let on_fail = resolved.on_fail;
    let rules_bound = resolved.rules.len() as u32;

    // The harness never reaches the operation; a stub keeps the binding real.
    let gate = GateBuilder::new(StateSnapshot::new)
        .rules(resolved.rules)
        .on_fail(on_fail.bind())
        .operation(|(): ()| ());

    let decision = DryRunHarness::run(&gate, &snapshot);

    let finished_at = OffsetDateTime::now_utc();

    let data = SideguardData {
        on_fail: on_fail.as_str().to_string(),
        rules_bound,
        rules_evaluated: decision.evaluated.len() as u32,
        state_keys: snapshot.len() as u32,
    };

    let report = SideguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "sideguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        decision,
        data,
    };

    Ok(SimulateOutput { report })
}
