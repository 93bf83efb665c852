use crate::core::AnalysisReport;
use crate::io::output::{severity_counts, OutputWriter};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Reviewmap Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let (errors, warnings, info) = severity_counts(report);

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Lines analyzed | {} |", report.line_count)?;
        writeln!(self.writer, "| Issues found | {} |", report.issues.len())?;
        writeln!(self.writer, "| Errors | {errors} |")?;
        writeln!(self.writer, "| Warnings | {warnings} |")?;
        writeln!(self.writer, "| Info | {info} |")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_issues(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.issues.is_empty() {
            writeln!(self.writer, "_No issues found._")?;
            return Ok(());
        }

        writeln!(self.writer, "## Issues")?;
        writeln!(self.writer)?;

        for issue in &report.issues {
            writeln!(
                self.writer,
                "### {}. Line {} - {} ({})",
                issue.id, issue.line, issue.kind, issue.severity
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", issue.explanation)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "```")?;
            writeln!(self.writer, "{}", issue.snippet)?;
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**Suggestion**: {}", issue.suggestion)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_issues(report)?;
        Ok(())
    }
}
