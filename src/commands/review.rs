use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::*;

use crate::analysis::analyze;
use crate::commands::analyze::read_source;
use crate::core::{Decision, ReviewStatus};
use crate::io::writers::terminal::severity_label;
use crate::review::ReviewSession;

pub struct ReviewConfig {
    pub path: PathBuf,
}

enum Answer {
    Decided(Decision),
    Skip,
    Quit,
}

pub fn handle_review(config: ReviewConfig) -> anyhow::Result<()> {
    let source = read_source(&config.path)?;
    let report = analyze(&source)?;

    if report.issues.is_empty() {
        println!("{}", "No issues found. Nothing to review.".green());
        return Ok(());
    }

    println!(
        "Reviewing {} issue(s). Answer {} to accept, {} to reject, {} to skip, {} to quit.",
        report.issues.len(),
        "a".green().bold(),
        "r".red().bold(),
        "s".yellow().bold(),
        "q".bold(),
    );
    println!();

    let mut session = ReviewSession::new(report.issues);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let total = session.issues().len();

    for index in 0..total {
        let (id, card) = {
            let issue = &session.issues()[index];
            let card = format!(
                "[{}/{}] line {:<4} {} [{}]\n      {}\n      {}",
                issue.id,
                total,
                issue.line,
                issue.kind,
                severity_label(issue.severity),
                issue.explanation,
                issue.snippet.dimmed(),
            );
            (issue.id, card)
        };
        println!("{card}");

        match prompt_answer(&mut input)? {
            Answer::Decided(decision) => session.decide(id, decision),
            Answer::Skip => {}
            Answer::Quit => break,
        }

        let stats = session.stats();
        println!(
            "      {} accepted, {} rejected, {} pending",
            stats.accepted.to_string().green(),
            stats.rejected.to_string().red(),
            stats.pending.to_string().yellow(),
        );
        println!();
    }

    print_outcome(&session);
    Ok(())
}

fn prompt_answer(input: &mut impl BufRead) -> anyhow::Result<Answer> {
    loop {
        print!("      accept / reject / skip [a/r/s/q]: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF leaves the rest of the queue pending.
            println!();
            return Ok(Answer::Quit);
        }
        match line.trim() {
            "a" | "accept" => return Ok(Answer::Decided(Decision::Accepted)),
            "r" | "reject" => return Ok(Answer::Decided(Decision::Rejected)),
            "s" | "skip" | "" => return Ok(Answer::Skip),
            "q" | "quit" => return Ok(Answer::Quit),
            other => println!("      unrecognized answer '{other}'"),
        }
    }
}

fn print_outcome(session: &ReviewSession) {
    let stats = session.stats();
    println!("───────────────────────────────────────────");
    println!(
        "Review totals: {} accepted, {} rejected, {} pending",
        stats.accepted.to_string().green(),
        stats.rejected.to_string().red(),
        stats.pending.to_string().yellow(),
    );
    println!();

    match session.report() {
        Ok(rows) => {
            println!("{}", "FINAL REPORT".bold());
            println!("{:<8} {:<20} {:<10} {}", "Line", "Kind", "Severity", "Status");
            for row in rows {
                println!(
                    "{:<8} {:<20} {:<10} {}",
                    row.line,
                    row.kind.to_string(),
                    row.severity.to_string(),
                    status_label(row.status),
                );
            }
        }
        Err(error) => println!("{}", error.to_string().yellow()),
    }
}

fn status_label(status: ReviewStatus) -> ColoredString {
    match status {
        ReviewStatus::Accepted => "accepted".green(),
        ReviewStatus::Rejected => "rejected".red(),
        ReviewStatus::Pending => "pending".yellow(),
    }
}
