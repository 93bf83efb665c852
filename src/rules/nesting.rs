//! Excessive nesting rule: cumulative brace depth with an edge-triggered
//! flag per deep region.

use crate::core::{Finding, IssueKind};

/// Depth above which a block is reported.
const MAX_DEPTH: i64 = 4;

/// Flag the first line where brace depth exceeds [`MAX_DEPTH`].
///
/// Depth is the running sum of `{` minus `}` occurrences, counted per
/// character across the whole file and never reset. One finding per deep
/// region: after the first report the flag stays set until depth returns
/// to the threshold or below, so a single deep block reports once while
/// separate deep regions each report again.
pub fn detect(lines: &[&str]) -> Vec<Finding> {
    let mut found = Vec::new();
    let mut depth: i64 = 0;
    let mut flagged = false;

    for (index, line) in lines.iter().enumerate() {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        depth += opens;
        depth -= closes;

        if depth > MAX_DEPTH && !flagged {
            flagged = true;
            found.push(Finding {
                line: index + 1,
                kind: IssueKind::ExcessiveNesting,
                explanation: format!(
                    "Code here is nested {depth} levels deep (threshold: {MAX_DEPTH})"
                ),
                suggestion: "Extract the inner logic into its own function or use early returns"
                    .to_string(),
                snippet: line.trim().to_string(),
            });
        }
        if depth <= MAX_DEPTH {
            flagged = false;
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_when_depth_first_exceeds_threshold() {
        let lines = vec![
            "if (a) {", "if (b) {", "if (c) {", "if (d) {", "if (e) {", "}", "}", "}", "}", "}",
        ];
        let found = detect(&lines);

        assert_eq!(found.len(), 1, "one finding for the whole deep block");
        assert_eq!(found[0].line, 5, "flagged where depth first hit 5");
        assert!(found[0].explanation.contains('5'));
    }

    #[test]
    fn rearms_after_depth_drops_back() {
        let mut lines = vec!["{", "{", "{", "{", "{"];
        lines.extend(["}", "}"]); // depth back to 3
        lines.extend(["{", "{"]); // deep again
        lines.extend(["}", "}", "}", "}", "}"]);

        let found = detect(&lines);
        assert_eq!(found.len(), 2, "each deep region reports once");
        assert_eq!(found[0].line, 5);
        assert_eq!(found[1].line, 9);
    }

    #[test]
    fn counts_every_brace_on_a_line() {
        let lines = vec!["{ { { { {", "} } } } }"];
        let found = detect(&lines);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 1, "five opens on one line reach depth 5");
    }

    #[test]
    fn silent_at_or_below_threshold() {
        let lines = vec!["{", "{", "{", "{", "}", "}", "}", "}"];
        assert!(detect(&lines).is_empty());
    }
}
