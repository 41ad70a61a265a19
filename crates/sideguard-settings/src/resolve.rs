use crate::model::SideguardConfigV1;
use sideguard_domain::rules::{BatteryMin, MaxTemp, RequireConnectivity, RequireFlag};
use sideguard_domain::Rule;
use sideguard_gate::OnFailKind;
use std::fmt;

/// CLI-level overrides; a set value wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub on_fail: Option<String>,
}

/// The resolved guard binding: rules constructed in catalog order plus the
/// failure policy kind. Produced once at binding time, before any invocation.
pub struct ResolvedConfig {
    pub rules: Vec<Box<dyn Rule>>,
    pub on_fail: OnFailKind,
}

impl ResolvedConfig {
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("rules", &self.rule_ids())
            .field("on_fail", &self.on_fail)
            .finish()
    }
}

pub fn resolve_config(
    cfg: SideguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    // Policy misconfiguration is a binding-time error, surfaced here before
    // any invocation can happen.
    let on_fail = match overrides.on_fail.or(cfg.on_fail).as_deref() {
        None | Some("return") => OnFailKind::Return,
        Some("raise") => OnFailKind::Raise,
        Some(other) => {
            anyhow::bail!("unknown on_fail: {other} (expected 'return' or 'raise')")
        }
    };

    let mut rules: Vec<Box<dyn Rule>> = Vec::new();

    if let Some(rule) = cfg.rules.battery_min {
        validate_finite("rules.battery_min.min", rule.min)?;
        rules.push(Box::new(BatteryMin::new(rule.min)));
    }
    if let Some(rule) = cfg.rules.max_temp {
        validate_finite("rules.max_temp.max", rule.max)?;
        rules.push(Box::new(MaxTemp::new(rule.max)));
    }
    if let Some(rule) = cfg.rules.require_connectivity {
        if rule.protocol.trim().is_empty() {
            anyhow::bail!("rules.require_connectivity.protocol must not be empty");
        }
        rules.push(Box::new(RequireConnectivity::new(rule.protocol)));
    }
    if let Some(rule) = cfg.rules.require_flag {
        if rule.key.trim().is_empty() {
            anyhow::bail!("rules.require_flag.key must not be empty");
        }
        rules.push(Box::new(RequireFlag::new(rule.key)));
    }

    Ok(ResolvedConfig { rules, on_fail })
}

fn validate_finite(field: &str, value: f64) -> anyhow::Result<()> {
    anyhow::ensure!(value.is_finite(), "{field} must be a finite number");
    Ok(())
}
