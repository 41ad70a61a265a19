//! The binding surface of sideguard.
//!
//! A [`Gate`] binds an ordered rule set, a failure policy, a state probe, and
//! the wrapped operation. Invoking it captures a fresh snapshot, runs the
//! evaluation engine, and either executes the operation or applies the bound
//! policy — strictly check-then-call, never call-then-check. The
//! [`DryRunHarness`] drives the same decision path with an injected snapshot
//! and execution suppressed.

#![forbid(unsafe_code)]

mod dryrun;
mod gate;
mod policy;
mod probe;

pub use dryrun::DryRunHarness;
pub use gate::{Gate, GateBuilder, GuardOutcome};
pub use policy::{GuardViolation, OnFail, OnFailKind};
pub use probe::StateProbe;
