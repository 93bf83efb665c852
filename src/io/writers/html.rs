use crate::core::{AnalysisReport, Severity};
use crate::io::output::{severity_counts, OutputWriter};
use anyhow::Result;
use html_escape::encode_text;
use std::io::Write;

pub struct HtmlWriter<W: Write> {
    writer: W,
    template: &'static str,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/report.html"),
        }
    }

    fn render(&self, report: &AnalysisReport) -> String {
        let (errors, warnings, info) = severity_counts(report);
        let timestamp = report.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string();

        self.template
            .replace("{{{TIMESTAMP}}}", &encode_text(&timestamp))
            .replace("{{{LINE_COUNT}}}", &report.line_count.to_string())
            .replace("{{{TOTAL_ISSUES}}}", &report.issues.len().to_string())
            .replace("{{{ERROR_COUNT}}}", &errors.to_string())
            .replace("{{{WARNING_COUNT}}}", &warnings.to_string())
            .replace("{{{INFO_COUNT}}}", &info.to_string())
            .replace("{{{ISSUE_CARDS}}}", &render_issue_cards(report))
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let html = self.render(report);
        self.writer.write_all(html.as_bytes())?;
        Ok(())
    }
}

fn render_issue_cards(report: &AnalysisReport) -> String {
    if report.issues.is_empty() {
        return String::from("<p class=\"empty\">No issues found.</p>");
    }

    let mut cards = String::new();
    for issue in &report.issues {
        let class = severity_class(issue.severity);
        cards.push_str(&format!(
            r#"<div class="issue {class}">
  <div class="issue-head">
    <span class="issue-id">#{id}</span>
    <span class="issue-line">Line {line}</span>
    <span class="issue-kind">{kind}</span>
    <span class="badge {class}">{severity}</span>
  </div>
  <p class="explanation">{explanation}</p>
  <pre class="snippet">{snippet}</pre>
  <p class="suggestion">{suggestion}</p>
</div>
"#,
            class = class,
            id = issue.id,
            line = issue.line,
            kind = encode_text(&issue.kind.to_string()),
            severity = encode_text(&issue.severity.to_string()),
            explanation = encode_text(&issue.explanation),
            snippet = encode_text(&issue.snippet),
            suggestion = encode_text(&issue.suggestion),
        ));
    }
    cards
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "sev-error",
        Severity::Warning => "sev-warning",
        Severity::Info => "sev-info",
    }
}
