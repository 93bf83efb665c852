//! CLI command implementations for reviewmap operations.
//!
//! Each submodule handles one command: configuration in, execution out.
//!
//! Available commands:
//! - **analyze**: run the detection rules over a file and write a report
//! - **review**: run the rules, then accept or reject each issue interactively

pub mod analyze;
pub mod review;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use review::{handle_review, ReviewConfig};
