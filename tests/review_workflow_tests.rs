//! Review workflow over real analysis output: decisions, stats,
//! and the gated final report.

use reviewmap::{analyze, Decision, IssueKind, ReviewSession, ReviewStatus, ReviewmapError};

fn session_from(source: &str) -> ReviewSession {
    let report = analyze(source).unwrap();
    ReviewSession::new(report.issues)
}

#[test]
fn full_review_produces_a_row_per_issue() {
    let mut session = session_from("let ghost = 1;\ncall(42);\n");
    assert_eq!(session.issues().len(), 2);

    session.decide(1, Decision::Accepted);
    session.decide(2, Decision::Rejected);

    let rows = session.report().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, IssueKind::UnusedVariable);
    assert_eq!(rows[0].status, ReviewStatus::Accepted);
    assert_eq!(rows[1].kind, IssueKind::MagicNumber);
    assert_eq!(rows[1].status, ReviewStatus::Rejected);
}

#[test]
fn report_is_withheld_while_any_issue_is_pending() {
    let mut session = session_from("let ghost = 1;\ncall(42);\n");
    session.decide(1, Decision::Accepted);

    match session.report() {
        Err(ReviewmapError::ReviewIncomplete { pending }) => assert_eq!(pending, 1),
        other => panic!("expected ReviewIncomplete, got {other:?}"),
    }
}

#[test]
fn decisions_can_be_revised_until_the_report() {
    let mut session = session_from("let ghost = 1;\nx();\n");
    session.decide(1, Decision::Accepted);
    session.decide(1, Decision::Rejected);

    assert_eq!(session.issues()[0].status, ReviewStatus::Rejected);
    assert_eq!(session.stats().accepted, 0);
    assert_eq!(session.stats().rejected, 1);
}

#[test]
fn unknown_ids_leave_the_session_untouched() {
    let mut session = session_from("let ghost = 1;\nx();\n");
    let before = session.issues().to_vec();

    session.decide(0, Decision::Accepted);
    session.decide(17, Decision::Rejected);

    assert_eq!(session.issues(), &before[..]);
}

#[test]
fn stats_partition_the_issue_set() {
    let mut session = session_from("let a = 1;\nlet b = 2;\ncall(300);\n");
    assert_eq!(session.issues().len(), 3);

    session.decide(1, Decision::Accepted);
    session.decide(3, Decision::Rejected);

    let stats = session.stats();
    assert_eq!(stats.accepted + stats.rejected + stats.pending, 3);
    assert_eq!(stats.pending, 1);
    assert!(!session.is_complete());
}

#[test]
fn accepting_everything_completes_the_review() {
    let mut session = session_from("let a = 1;\ncall(300);\n");
    let ids: Vec<usize> = session.issues().iter().map(|issue| issue.id).collect();
    for id in ids {
        session.decide(id, Decision::Accepted);
    }

    assert!(session.is_complete());
    let rows = session.report().unwrap();
    assert!(rows.iter().all(|row| row.status == ReviewStatus::Accepted));
}
