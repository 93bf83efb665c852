//! Long function rule: measures the span from a `function` declaration
//! line to the line where its brace depth returns to zero.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Finding, IssueKind};

/// Functions spanning more than this many lines (declaration through
/// closing brace, inclusive) are reported.
const MAX_SPAN: usize = 30;

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").unwrap());

/// Flag functions whose total line span exceeds [`MAX_SPAN`].
///
/// From each declaration line a forward scan adds `{` and subtracts `}`
/// per character; once any opening brace has been seen and depth returns
/// to exactly zero the function is closed, and the outer scan resumes on
/// the next line so declarations inside a measured body are never
/// revisited. A body that never closes before end of input yields
/// nothing: no finding, no error, and the outer scan carries on from the
/// line after the declaration.
pub fn detect(lines: &[&str]) -> Vec<Finding> {
    let mut found = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if let Some(captures) = DECLARATION.captures(lines[i]) {
            let name = captures.get(1).unwrap().as_str();
            let start = i;
            let mut depth: i64 = 0;
            let mut body_started = false;
            let mut j = i;

            while j < lines.len() {
                let opens = lines[j].matches('{').count() as i64;
                let closes = lines[j].matches('}').count() as i64;
                depth += opens;
                depth -= closes;

                if opens > 0 {
                    body_started = true;
                }

                if body_started && depth == 0 {
                    let span = j - start + 1;
                    if span > MAX_SPAN {
                        found.push(Finding {
                            line: start + 1,
                            kind: IssueKind::LongFunction,
                            explanation: format!(
                                "Function '{name}' spans {span} lines (threshold: {MAX_SPAN})"
                            ),
                            suggestion: format!(
                                "Break '{name}' into smaller functions that each do one job"
                            ),
                            snippet: lines[start].trim().to_string(),
                        });
                    }
                    i = j;
                    break;
                }
                j += 1;
            }
        }
        i += 1;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build `function <name>() { ... }` spanning exactly `span` lines.
    fn function_of(name: &str, span: usize) -> Vec<String> {
        assert!(span >= 2);
        let mut lines = vec![format!("function {name}() {{")];
        for n in 0..span - 2 {
            lines.push(format!("    work({n});"));
        }
        lines.push("}".to_string());
        lines
    }

    fn as_refs(lines: &[String]) -> Vec<&str> {
        lines.iter().map(String::as_str).collect()
    }

    #[test]
    fn flags_a_function_spanning_thirty_one_lines() {
        let lines = function_of("bulky", 31);
        let found = detect(&as_refs(&lines));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 1);
        assert!(found[0].explanation.contains("'bulky'"));
        assert!(found[0].explanation.contains("31"));
        assert_eq!(found[0].snippet, "function bulky() {");
    }

    #[test]
    fn thirty_lines_is_still_acceptable() {
        let lines = function_of("fits", 30);
        assert!(detect(&as_refs(&lines)).is_empty());
    }

    #[test]
    fn unterminated_function_reports_nothing() {
        let mut lines = vec!["function broken() {".to_string()];
        for n in 0..40 {
            lines.push(format!("    work({n});"));
        }
        assert!(detect(&as_refs(&lines)).is_empty());
    }

    #[test]
    fn declarations_inside_a_measured_body_are_skipped() {
        let mut lines = vec!["function outer() {".to_string()];
        for n in 0..20 {
            lines.push(format!("    before({n});"));
        }
        lines.push("    function inner() {".to_string());
        lines.push("        tiny();".to_string());
        lines.push("    }".to_string());
        for n in 0..20 {
            lines.push(format!("    after({n});"));
        }
        lines.push("}".to_string());

        let found = detect(&as_refs(&lines));
        assert_eq!(found.len(), 1, "inner was consumed by outer's scan");
        assert!(found[0].explanation.contains("'outer'"));
    }

    #[test]
    fn scan_resumes_after_a_closed_function() {
        let mut lines = function_of("first", 10);
        lines.extend(function_of("second", 35));

        let found = detect(&as_refs(&lines));
        assert_eq!(found.len(), 1);
        assert!(found[0].explanation.contains("'second'"));
        assert_eq!(found[0].line, 11);
    }

    #[test]
    fn one_line_body_closes_on_the_declaration_line() {
        let lines = vec!["function tiny() { return 0; }", "tiny();"];
        assert!(detect(&lines).is_empty());
    }
}
