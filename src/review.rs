//! Human review workflow over one analysis run's issues.

use serde::{Deserialize, Serialize};

use crate::core::{
    Decision, Issue, IssueKind, ReviewStatus, ReviewmapError, ReviewmapResult, Severity,
};

/// Counts of review states across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub accepted: usize,
    pub rejected: usize,
    pub pending: usize,
}

/// One row of the final report: location, classification, verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub line: usize,
    pub kind: IssueKind,
    pub severity: Severity,
    pub status: ReviewStatus,
}

/// Owns the issues of one run while a human accepts or rejects them.
///
/// The session is the single writer of issue `status`; everything else
/// about an issue stays frozen after aggregation. Dropping the session
/// is the whole reset story: no review state survives across runs.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    issues: Vec<Issue>,
}

impl ReviewSession {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// The issue sequence in ascending id order, current statuses included.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Apply a decision to the issue with `id`.
    ///
    /// Mutates only `status`. Unknown ids are ignored; repeating a
    /// decision re-sets the same status and nothing else.
    pub fn decide(&mut self, id: usize, decision: Decision) {
        match self.issues.iter_mut().find(|issue| issue.id == id) {
            Some(issue) => issue.status = decision.status(),
            None => log::debug!("decision for unknown issue id {id} ignored"),
        }
    }

    /// Current accepted/rejected/pending counts.
    pub fn stats(&self) -> ReviewStats {
        let mut stats = ReviewStats {
            accepted: 0,
            rejected: 0,
            pending: 0,
        };
        for issue in &self.issues {
            match issue.status {
                ReviewStatus::Accepted => stats.accepted += 1,
                ReviewStatus::Rejected => stats.rejected += 1,
                ReviewStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }

    /// True once every issue has left `Pending`.
    pub fn is_complete(&self) -> bool {
        self.issues
            .iter()
            .all(|issue| issue.status != ReviewStatus::Pending)
    }

    /// Final summary rows in id order.
    ///
    /// Available only when the review is complete; otherwise reports how
    /// many issues still await a verdict. An empty session is trivially
    /// complete and yields zero rows.
    pub fn report(&self) -> ReviewmapResult<Vec<ReportRow>> {
        let pending = self.stats().pending;
        if pending > 0 {
            return Err(ReviewmapError::ReviewIncomplete { pending });
        }

        Ok(self
            .issues
            .iter()
            .map(|issue| ReportRow {
                line: issue.line,
                kind: issue.kind,
                severity: issue.severity,
                status: issue.status,
            })
            .collect())
    }
}
