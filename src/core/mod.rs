//! Result-contract types shared across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Severity, &str)] = &[
            (Severity::Info, "info"),
            (Severity::Warning, "warning"),
            (Severity::Error, "error"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(s, _)| s == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{display_str}")
    }
}

/// The closed set of issue kinds the detection engine reports.
///
/// Fixed at compile time; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    UnusedVariable,
    ExcessiveNesting,
    MagicNumber,
    LongFunction,
}

impl IssueKind {
    /// Fixed severity for this kind of issue.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::UnusedVariable => Severity::Warning,
            IssueKind::ExcessiveNesting => Severity::Warning,
            IssueKind::MagicNumber => Severity::Info,
            IssueKind::LongFunction => Severity::Error,
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(IssueKind, &str)] = &[
            (IssueKind::UnusedVariable, "Unused Variable"),
            (IssueKind::ExcessiveNesting, "Excessive Nesting"),
            (IssueKind::MagicNumber, "Magic Number"),
            (IssueKind::LongFunction, "Long Function"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(k, _)| k == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Review state of a single issue. Starts `Pending`; only the review
/// workflow moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewStatus {
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(ReviewStatus, &str)] = &[
            (ReviewStatus::Pending, "pending"),
            (ReviewStatus::Accepted, "accepted"),
            (ReviewStatus::Rejected, "rejected"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(s, _)| s == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{display_str}")
    }
}

/// A reviewer's verdict on one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
}

impl Decision {
    /// The review status this decision resolves to.
    pub fn status(self) -> ReviewStatus {
        match self {
            Decision::Accepted => ReviewStatus::Accepted,
            Decision::Rejected => ReviewStatus::Rejected,
        }
    }
}

/// Raw detector output, before aggregation.
///
/// Detectors report location, classification, and the templated
/// explanation/suggestion text. They never assign `id`, `severity`, or
/// review status; those are owned by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub line: usize,
    pub kind: IssueKind,
    pub explanation: String,
    pub suggestion: String,
    pub snippet: String,
}

/// One detected code-quality issue.
///
/// Immutable after aggregation except for `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within one run; 1-based position in the final ordering.
    pub id: usize,
    /// 1-based line number where the issue was detected.
    pub line: usize,
    pub kind: IssueKind,
    pub severity: Severity,
    pub explanation: String,
    pub suggestion: String,
    /// Trimmed source text of the offending line.
    pub snippet: String,
    pub status: ReviewStatus,
}

/// Analysis result container handed to writers and the review session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: DateTime<Utc>,
    /// Number of physical lines in the analyzed source.
    pub line_count: usize,
    /// Final ordered issue sequence (ascending id).
    pub issues: Vec<Issue>,
}

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum ReviewmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty input: nothing to analyze")]
    EmptyInput,

    #[error("review incomplete: {pending} issue(s) still pending")]
    ReviewIncomplete { pending: usize },
}

/// Result type alias
pub type ReviewmapResult<T> = Result<T, ReviewmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_fixed_per_kind() {
        assert_eq!(IssueKind::UnusedVariable.severity(), Severity::Warning);
        assert_eq!(IssueKind::ExcessiveNesting.severity(), Severity::Warning);
        assert_eq!(IssueKind::MagicNumber.severity(), Severity::Info);
        assert_eq!(IssueKind::LongFunction.severity(), Severity::Error);
    }

    #[test]
    fn display_names_match_card_labels() {
        assert_eq!(IssueKind::UnusedVariable.to_string(), "Unused Variable");
        assert_eq!(IssueKind::LongFunction.to_string(), "Long Function");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(ReviewStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn decision_resolves_to_matching_status() {
        assert_eq!(Decision::Accepted.status(), ReviewStatus::Accepted);
        assert_eq!(Decision::Rejected.status(), ReviewStatus::Rejected);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
