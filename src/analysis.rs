//! Analysis entry point: line splitting, rule fan-out, and aggregation.

use chrono::Utc;

use crate::core::{AnalysisReport, Finding, Issue, ReviewStatus, ReviewmapError, ReviewmapResult};
use crate::rules;

/// Split raw source text into physical lines.
///
/// Plain `\n` splitting: a trailing newline yields a final empty line and
/// `\r` stays attached on CRLF input. The rules see exactly what the
/// splitter produced.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split('\n').collect()
}

/// Run one full analysis over `source`.
///
/// Blank or whitespace-only input is a user-input condition and reports
/// as [`ReviewmapError::EmptyInput`]; any other string yields a (possibly
/// empty) issue list. Returned issues are ordered by line ascending with
/// ties kept in rule declaration order, and ids are the 1-based positions
/// in that ordering. Each call is one self-contained run; the caller owns
/// the result and discards it wholesale on the next run.
pub fn analyze(source: &str) -> ReviewmapResult<AnalysisReport> {
    if source.trim().is_empty() {
        return Err(ReviewmapError::EmptyInput);
    }

    let lines = split_lines(source);
    log::debug!("analyzing {} line(s)", lines.len());

    let per_rule = rules::run_all(&lines);
    let issues = aggregate(per_rule);
    log::debug!("analysis produced {} issue(s)", issues.len());

    Ok(AnalysisReport {
        timestamp: Utc::now(),
        line_count: lines.len(),
        issues,
    })
}

/// Merge rule outputs into the final issue sequence.
///
/// Single authority for `id`, `severity`, and initial `status`: detectors
/// hand over findings, this concatenates them in declaration order,
/// stable-sorts by line so equal lines keep that order, and stamps the
/// 1-based id.
fn aggregate(per_rule: Vec<Vec<Finding>>) -> Vec<Issue> {
    let mut combined: Vec<Finding> = per_rule.into_iter().flatten().collect();
    combined.sort_by_key(|finding| finding.line);

    combined
        .into_iter()
        .enumerate()
        .map(|(index, finding)| Issue {
            id: index + 1,
            line: finding.line,
            kind: finding.kind,
            severity: finding.kind.severity(),
            explanation: finding.explanation,
            suggestion: finding.suggestion,
            snippet: finding.snippet,
            status: ReviewStatus::Pending,
        })
        .collect()
}
