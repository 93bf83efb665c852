// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod review;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, Decision, Finding, Issue, IssueKind, ReviewStatus, ReviewmapError,
    ReviewmapResult, Severity,
};

pub use crate::analysis::{analyze, split_lines};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::review::{ReportRow, ReviewSession, ReviewStats};
