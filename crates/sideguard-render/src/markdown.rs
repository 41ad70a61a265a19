use crate::{RenderableDecision, RenderableReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Sideguard report\n\n");
    let decision = match report.decision {
        RenderableDecision::Allowed => "ALLOWED",
        RenderableDecision::Blocked => "BLOCKED",
    };
    out.push_str(&format!(
        "- Decision: **{}**\n- Rules evaluated: {} (over {} state keys)\n\n",
        decision, report.data.rules_evaluated, report.data.state_keys
    ));

    if let Some(reason) = &report.reason {
        out.push_str(&format!("> Reason: {}\n", reason));
    }
    if let Some(suggestion) = &report.suggestion {
        out.push_str(&format!("> Suggestion: {}\n", suggestion));
    }
    if report.reason.is_some() || report.suggestion.is_some() {
        out.push('\n');
    }

    if report.rules.is_empty() {
        out.push_str("No rules evaluated.\n");
        return out;
    }

    out.push_str("## Evaluation\n\n");

    for rule in &report.rules {
        if rule.passed {
            out.push_str(&format!("- [PASS] `{}`\n", rule.rule_id));
        } else {
            out.push_str(&format!(
                "- [FAIL] `{}` — {}\n",
                rule.rule_id,
                rule.reason.as_deref().unwrap_or("")
            ));
            if let Some(suggestion) = &rule.suggestion {
                out.push_str(&format!("  - suggestion: {}\n", suggestion));
            }
        }
    }

    out
}
