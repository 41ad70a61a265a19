//! CLI entry point for sideguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `sideguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use sideguard_app::{
    decision_exit_code, format_explanation, format_not_found, parse_report_json, render_markdown,
    run_explain, run_simulate, runtime_error_report, serialize_report, to_renderable,
    ExplainOutput, SimulateInput,
};
use sideguard_settings::Overrides;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "sideguard",
    version,
    about = "Deterministic pre-execution guard for agent-triggered side effects"
)]
struct Cli {
    /// Path to sideguard config TOML.
    #[arg(long, default_value = "sideguard.toml")]
    config: Utf8PathBuf,

    /// Override the failure policy (return|raise).
    #[arg(long)]
    on_fail: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dry-run the configured rule set against a state snapshot file.
    Simulate {
        /// Path to the injected state snapshot (JSON object).
        #[arg(long)]
        state: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/sideguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/sideguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/sideguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id or code with remediation guidance.
    Explain {
        /// The rule_id (e.g., "state.battery_min") or code (e.g.,
        /// "missing_state_key") to explain.
        identifier: String,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sideguard error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.cmd {
        Commands::Simulate {
            ref state,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => simulate(
            &cli,
            state,
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Md { report, output } => {
            let text = std::fs::read_to_string(&report)
                .with_context(|| format!("read report: {report}"))?;
            let md = render_markdown(&to_renderable(&parse_report_json(&text)?));
            match output {
                Some(path) => write_artifact(&path, md.as_bytes()).context("write markdown")?,
                None => print!("{md}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain { identifier } => Ok(explain(&identifier)),
    }
}

fn simulate(
    cli: &Cli,
    state: &Utf8Path,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<ExitCode> {
    let simulated = std::fs::read_to_string(state)
        .with_context(|| format!("read state snapshot: {state}"))
        .and_then(|state_json| {
            // Missing config file is allowed; defaults apply.
            let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
            run_simulate(SimulateInput {
                config_text: &config_text,
                state_json: &state_json,
                overrides: Overrides {
                    on_fail: cli.on_fail.clone(),
                },
            })
        });

    // A tool-level failure still leaves a report artifact behind before the
    // error surfaces, so CI consumers never see a stale report.
    let report = match simulated {
        Ok(output) => output.report,
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Ok(bytes) = serialize_report(&report) {
                let _ = write_artifact(report_out, &bytes);
            }
            return Err(err);
        }
    };

    write_artifact(report_out, &serialize_report(&report)?).context("write report json")?;
    if let Some(path) = markdown_out {
        let md = render_markdown(&to_renderable(&report));
        write_artifact(path, md.as_bytes()).context("write markdown")?;
    }

    Ok(ExitCode::from(decision_exit_code(&report) as u8))
}

fn explain(identifier: &str) -> ExitCode {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            ExitCode::SUCCESS
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            ExitCode::from(1)
        }
    }
}

fn write_artifact(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}
