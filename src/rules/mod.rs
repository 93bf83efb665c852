//! Line-oriented detection rules.
//!
//! Each rule is a pure function over the shared line sequence, producing
//! raw findings for one issue kind. Rules never see each other's output;
//! ordering and identity are owned by the aggregator in
//! [`crate::analysis`].

pub mod long_function;
pub mod magic_number;
pub mod nesting;
pub mod unused_variable;

use crate::core::Finding;

/// True for characters that can appear inside an identifier token.
///
/// Mirrors the `[A-Za-z0-9_$]` class used by the declaration patterns, so
/// occurrence counting splits lines on exactly the boundaries the patterns
/// match on.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Run all four rules over the line sequence.
///
/// The rules read the shared slice and nothing else, so they fan out onto
/// rayon workers. Outputs are assembled in declaration order
/// (UnusedVariable, ExcessiveNesting, MagicNumber, LongFunction) no matter
/// which worker finishes first, keeping the aggregator's tie-break stable.
pub fn run_all(lines: &[&str]) -> Vec<Vec<Finding>> {
    let ((unused, nesting), (magic, long)) = rayon::join(
        || {
            rayon::join(
                || unused_variable::detect(lines),
                || nesting::detect(lines),
            )
        },
        || {
            rayon::join(
                || magic_number::detect(lines),
                || long_function::detect(lines),
            )
        },
    );

    vec![unused, nesting, magic, long]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IssueKind;

    #[test]
    fn run_all_keeps_declaration_order() {
        // One line that trips every rule family somewhere in the file.
        let lines = vec![
            "let ghost = 1;",
            "function widen(a) {",
            "{ { { { {",
            "wait(99);",
            "} } } } }",
            "}",
        ];

        let outputs = run_all(&lines);
        assert_eq!(outputs.len(), 4);
        assert!(outputs[0]
            .iter()
            .all(|f| f.kind == IssueKind::UnusedVariable));
        assert!(outputs[1]
            .iter()
            .all(|f| f.kind == IssueKind::ExcessiveNesting));
        assert!(outputs[2].iter().all(|f| f.kind == IssueKind::MagicNumber));
        assert!(outputs[3].iter().all(|f| f.kind == IssueKind::LongFunction));
    }

    #[test]
    fn identifier_chars_cover_the_token_class() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('Z'));
        assert!(is_identifier_char('0'));
        assert!(is_identifier_char('_'));
        assert!(is_identifier_char('$'));
        assert!(!is_identifier_char('-'));
        assert!(!is_identifier_char('.'));
        assert!(!is_identifier_char(' '));
    }
}
