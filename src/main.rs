#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # rubrica
//!
//! A rubric-based autograder for full-stack Java assignments. Run it at the
//! root of a submitted repository (or pass the root as an argument); it
//! evaluates every rubric criterion, prints a summary, and overwrites
//! `resultados.csv` with the final grade and comments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use rubrica::{config, grade::GradeContext, grade::grade_all, report};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade the repository rooted at the given directory.
    Grade(Option<PathBuf>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the optional repository root
    fn root() -> impl Parser<Option<PathBuf>> {
        positional::<PathBuf>("ROOT")
            .help("Repository root to evaluate (defaults to the current directory)")
            .optional()
    }

    let grade = construct!(Cmd::Grade(root()))
        .to_options()
        .command("grade")
        .help("Evaluate the rubric and write resultados.csv");

    construct!([grade])
        .to_options()
        .descr("Rubric autograder for full-stack Java assignments")
        .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let Cmd::Grade(root) = options();
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir().context("Could not determine the working directory")?,
    };

    let student = report::student_identifier(&root);
    tracing::info!("evaluating {} for {student}", config::ASSIGNMENT);
    tracing::info!("repository root: {}", root.display());

    let ctx = GradeContext::new(root.clone());
    let summary = grade_all(&ctx).await?;

    report::print_summary(&student, &summary);

    let results_path = root.join(config::RESULTS_FILE);
    report::write_results_csv(&results_path, &student, &summary)?;
    tracing::info!("report written to {}", results_path.display());

    Ok(())
}
