//! The `explain` use case: remediation guidance for a rule or code.

use sideguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier, with the registry inventory for the error message.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a rule_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: explain::all_rule_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let title = format!("{}\n{}\n", exp.title, "=".repeat(exp.title.len()));
    let remediation = format!("Remediation\n-----------\n{}\n", exp.remediation);
    let examples = format!(
        "Examples\n--------\n\nBefore (blocked):\n```json\n{}\n```\n\nAfter (allowed):\n```json\n{}\n```\n",
        exp.examples.before, exp.examples.after
    );

    [
        title,
        format!("{}\n", exp.description),
        remediation,
        examples,
    ]
    .join("\n")
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    rule_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let list = |items: &[&'static str]| {
        items
            .iter()
            .map(|item| format!("  {item}\n"))
            .collect::<String>()
    };

    format!(
        "Unknown rule_id or code: {identifier}\n\n\
         Available rule_ids:\n{}\n\
         Available codes:\n{}",
        list(rule_ids),
        list(codes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifier_is_found() {
        match run_explain("state.battery_min") {
            ExplainOutput::Found(exp) => assert!(!exp.title.is_empty()),
            ExplainOutput::NotFound { .. } => panic!("state.battery_min should be known"),
        }
    }

    #[test]
    fn unknown_identifier_lists_alternatives() {
        match run_explain("nope") {
            ExplainOutput::Found(_) => panic!("'nope' should be unknown"),
            ExplainOutput::NotFound {
                identifier,
                available_rule_ids,
                available_codes,
            } => {
                assert_eq!(identifier, "nope");
                let text = format_not_found(&identifier, available_rule_ids, available_codes);
                assert!(text.contains("state.battery_min"));
                assert!(text.contains("missing_state_key"));
            }
        }
    }

    #[test]
    fn formatted_explanation_contains_all_sections() {
        let ExplainOutput::Found(exp) = run_explain("state.require_connectivity") else {
            panic!("state.require_connectivity should be known");
        };
        let text = format_explanation(&exp);
        assert!(text.contains("Remediation"));
        assert!(text.contains("Before (blocked):"));
        assert!(text.contains("After (allowed):"));
    }
}
