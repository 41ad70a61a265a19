//! Use case orchestration for sideguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, gate, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod render;
mod report;
mod simulate;

pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::render_markdown;
pub use report::{
    decision_exit_code, parse_report_json, runtime_error_report, serialize_report, to_renderable,
};
pub use simulate::{run_simulate, SimulateInput, SimulateOutput};

// Re-exported so the CLI can hold a report without importing the types crate.
pub use sideguard_types::SideguardReport;
