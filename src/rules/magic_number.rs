//! Magic number rule: bare numeric literals in executable lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Finding, IssueKind};

/// Declaration lines are already naming the value, which is the fix this
/// rule asks for, so they are skipped wholesale.
static DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(const|let|var)\s+").unwrap());

/// Numbers worth naming: a 2-9 lead digit with any continuation, or a 1-9
/// lead digit followed by two or more further digits. 0 and 1 never
/// match, and neither does 10 through 19: a number leading with 1 needs
/// three digits to qualify. That boundary ships as-is, gap included; it
/// is not a generalized "anything >= 2" check.
static MAGIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([2-9][0-9]*|[1-9][0-9]{2,})\b").unwrap());

/// Flag lines where a bare numeric literal appears outside declarations,
/// comments, and blank lines.
///
/// One finding per qualifying line, quoting the leftmost match even when
/// the line holds several candidates.
pub fn detect(lines: &[&str]) -> Vec<Finding> {
    let mut found = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if DECLARATION.is_match(line) {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.is_empty() {
            continue;
        }

        if let Some(value) = MAGIC.find(line).map(|m| m.as_str()) {
            found.push(Finding {
                line: index + 1,
                kind: IssueKind::MagicNumber,
                explanation: format!("The number {value} appears directly in an expression"),
                suggestion: format!(
                    "Name it once, e.g. `const MAX_ITEMS = {value}`, and use the constant"
                ),
                snippet: trimmed.to_string(),
            });
        }
    }

    found
}
