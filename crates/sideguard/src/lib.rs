//! Public facade over the sideguard library surface.
//!
//! Binds everything needed to guard a side-effecting operation in one place:
//!
//! ```
//! use sideguard::{BatteryMin, GateBuilder, RequireConnectivity, StateSnapshot};
//!
//! let mut clean_zone = GateBuilder::new(|| {
//!     StateSnapshot::new()
//!         .with("battery", 80.0)
//!         .with("connection", "wifi")
//! })
//! .rule(BatteryMin::new(20.0))
//! .rule(RequireConnectivity::new("WIFI"))
//! .operation(|zone: &str| format!("cleaned {zone}"));
//!
//! let outcome = clean_zone.invoke("zone a").unwrap();
//! assert_eq!(outcome.into_executed().as_deref(), Some("cleaned zone a"));
//! ```

#![forbid(unsafe_code)]

pub use sideguard_domain::rules::{BatteryMin, MaxTemp, RequireConnectivity, RequireFlag};
pub use sideguard_domain::{evaluate, Rule};
pub use sideguard_gate::{
    DryRunHarness, Gate, GateBuilder, GuardOutcome, GuardViolation, OnFail, OnFailKind, StateProbe,
};
pub use sideguard_types::{
    EvaluationResult, GuardDecision, RejectionPayload, SimulationReport, StateSnapshot, StateValue,
    Verdict,
};
