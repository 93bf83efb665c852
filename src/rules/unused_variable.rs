//! Unused variable rule: a `let`/`const`/`var` declaration whose name
//! appears exactly once in the whole text, i.e. only at the declaration.

use once_cell::sync::Lazy;
use regex::Regex;

use super::is_identifier_char;
use crate::core::{Finding, IssueKind};

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(let|const|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap());

/// Flag declarations whose name is never referenced anywhere else.
///
/// Counting is purely textual: every line is split into maximal runs of
/// identifier characters and compared token-for-token, so `x` does not
/// match inside `index`, but a mention inside a string literal or comment
/// still counts as a use. Only the first identifier after the keyword is
/// inspected; further declarations on the same line are not captured.
pub fn detect(lines: &[&str]) -> Vec<Finding> {
    let mut found = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(captures) = DECLARATION.captures(line) else {
            continue;
        };
        let name = captures.get(2).unwrap().as_str();

        if occurrence_count(lines, name) == 1 {
            found.push(Finding {
                line: index + 1,
                kind: IssueKind::UnusedVariable,
                explanation: format!(
                    "Variable '{name}' is declared but never used anywhere in the source"
                ),
                suggestion: format!(
                    "Delete the declaration or reference '{name}' where its value is needed"
                ),
                snippet: line.trim().to_string(),
            });
        }
    }

    found
}

/// Exact-token occurrences of `name` across the whole text, declaration
/// line included.
fn occurrence_count(lines: &[&str], name: &str) -> usize {
    lines
        .iter()
        .flat_map(|line| line.split(|c: char| !is_identifier_char(c)))
        .filter(|token| *token == name)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_declaration_with_single_occurrence() {
        let lines = vec!["let x = 5;", "console.log(y);"];
        let found = detect(&lines);

        assert_eq!(found.len(), 1, "only 'x' is declared and unused");
        assert_eq!(found[0].line, 1);
        assert_eq!(found[0].kind, IssueKind::UnusedVariable);
        assert!(found[0].explanation.contains("'x'"));
        assert_eq!(found[0].snippet, "let x = 5;");
    }

    #[test]
    fn any_second_token_occurrence_counts_as_use() {
        // Mentions inside comments count; the rule is textual on purpose.
        let lines = vec!["let x = 5;", "// x holds the retry budget"];
        assert!(detect(&lines).is_empty());
    }

    #[test]
    fn name_does_not_match_inside_longer_tokens() {
        let lines = vec!["let x = 5;", "index += 1;"];
        let found = detect(&lines);

        assert_eq!(found.len(), 1, "'index' must not count as a use of 'x'");
        assert_eq!(found[0].line, 1);
    }

    #[test]
    fn only_first_declared_name_on_a_line_is_inspected() {
        // Documented limitation: 'b' is unused too but never captured.
        let lines = vec!["let a = 1, b = 2;", "use_it(a);"];
        assert!(detect(&lines).is_empty());
    }

    #[test]
    fn dollar_and_underscore_names_are_matched() {
        let lines = vec!["var $tmp = load();", "let _spare = 0;"];
        let found = detect(&lines);

        assert_eq!(found.len(), 2);
        assert!(found[0].explanation.contains("'$tmp'"));
        assert!(found[1].explanation.contains("'_spare'"));
    }
}
