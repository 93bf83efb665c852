use crate::core::{AnalysisReport, Severity};
use crate::io::output::{severity_counts, OutputWriter};
use colored::*;

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header();
        print_summary(report);
        print_issues(report);
        Ok(())
    }
}

fn print_header() {
    println!();
    println!("{}", "═══════════════════════════════════════════".blue());
    println!("{}", "         REVIEWMAP ANALYSIS REPORT".bold().blue());
    println!("{}", "═══════════════════════════════════════════".blue());
    println!();
}

fn print_summary(report: &AnalysisReport) {
    let (errors, warnings, info) = severity_counts(report);

    println!("📊 {} Summary", "ANALYSIS".bold());
    println!("───────────────────────────────────────────");
    println!("  Lines analyzed:      {}", report.line_count);
    println!("  Issues found:        {}", report.issues.len());
    println!("  Errors:              {}", errors.to_string().red());
    println!("  Warnings:            {}", warnings.to_string().yellow());
    println!("  Info:                {}", info.to_string().cyan());
    println!();
}

fn print_issues(report: &AnalysisReport) {
    if report.issues.is_empty() {
        println!("{}", "No issues found.".green());
        println!();
        return;
    }

    println!("🔧 {} ({} items)", "ISSUES".bold(), report.issues.len());
    println!("───────────────────────────────────────────");

    for issue in &report.issues {
        println!(
            "  {:>3}. line {:<5} {:<18} [{}]",
            issue.id,
            issue.line,
            issue.kind.to_string(),
            severity_label(issue.severity)
        );
        println!("       {}", issue.explanation);
        println!("       {}", issue.snippet.dimmed());
        println!("       💡 {}", issue.suggestion);
    }
    println!();
}

pub(crate) fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".red(),
        Severity::Warning => "warning".yellow(),
        Severity::Info => "info".cyan(),
    }
}
