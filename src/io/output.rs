use std::fs::File;
use std::path::Path;

use crate::core::{AnalysisReport, Severity};
use crate::io::writers::{HtmlWriter, JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
    Html,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
        OutputFormat::Html => Box::new(HtmlWriter::new(std::io::stdout())),
    }
}

pub fn create_file_writer(
    format: OutputFormat,
    path: &Path,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = File::create(path)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
        OutputFormat::Html => Box::new(HtmlWriter::new(file)),
        // Terminal output is ANSI styled; a file destination gets markdown.
        OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
    })
}

/// (errors, warnings, info) totals used by every summary section.
pub fn severity_counts(report: &AnalysisReport) -> (usize, usize, usize) {
    report
        .issues
        .iter()
        .fold((0, 0, 0), |(e, w, i), issue| match issue.severity {
            Severity::Error => (e + 1, w, i),
            Severity::Warning => (e, w + 1, i),
            Severity::Info => (e, w, i + 1),
        })
}
