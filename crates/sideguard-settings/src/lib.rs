//! Config parsing and guard binding resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{
    BatteryMinConfig, MaxTempConfig, RequireConnectivityConfig, RequireFlagConfig, RulesConfig,
    SideguardConfigV1,
};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `sideguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SideguardConfigV1> {
    let cfg: SideguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the guard binding used at invocation time (rule construction in
/// catalog order + failure policy + CLI overrides).
pub fn resolve_config(
    cfg: SideguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
