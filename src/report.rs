#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{config, grade::GradeSummary};

/// Derives the student identifier from `GITHUB_REPOSITORY` (`owner/repo`),
/// falling back to the working directory's basename, and strips known
/// assignment prefixes from it.
pub fn student_identifier(root: &Path) -> String {
    let repo_short = match std::env::var("GITHUB_REPOSITORY") {
        Ok(full) if !full.is_empty() => full
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
        _ => root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let cleaned = config::repo_prefix_regex()
        .replace(&repo_short, "")
        .into_owned();

    if !cleaned.is_empty() {
        cleaned
    } else if !repo_short.is_empty() {
        repo_short
    } else {
        "desconocido".to_string()
    }
}

/// Overwrites the report file with a header and exactly one data row.
pub fn write_results_csv(path: &Path, student: &str, summary: &GradeSummary) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Could not create {}", path.display()))?;

    writer
        .write_record(config::RESULTS_HEADERS)
        .context("Could not write report header")?;

    let grade = format!("{:.1}", summary.total);
    writer
        .write_record([student, config::ASSIGNMENT, grade.as_str(), summary.comment.as_str()])
        .context("Could not write report row")?;
    writer.flush().context("Could not flush report file")?;

    Ok(())
}

/// Prints the per-criterion table, the evaluated-file list, and the final
/// grade line.
pub fn print_summary(student: &str, summary: &GradeSummary) {
    let mut rows = summary.results.clone();
    rows.push(summary.extra.clone());

    eprintln!(
        "{}",
        Table::new(&rows)
            .with(Panel::header(format!(
                "{} evaluation for {student}",
                config::ASSIGNMENT
            )))
            .with(Panel::footer(format!(
                "Total: {:.1}/{:.1}",
                summary.total,
                config::MAX_GRADE
            )))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );

    let evidence = summary.evidence();
    if !evidence.is_empty() {
        eprintln!("Files evaluated ({}):", evidence.len());
        for path in evidence.iter().take(10) {
            eprintln!("  {}", path.display());
        }
        if evidence.len() > 10 {
            eprintln!("  ... and {} more", evidence.len() - 10);
        }
    }

    let grade_line = format!("Nota: {:.1}/{:.1}", summary.total, config::MAX_GRADE);
    if summary.total < 5.0 {
        println!("{}", grade_line.red().bold());
        println!("Grade below 5.0; the report file was still written.");
    } else {
        println!("{}", grade_line.green().bold());
    }
}
