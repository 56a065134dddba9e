#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Aggregation policy and comment assembly.
pub mod aggregate;
/// Backend API criterion.
pub mod backend;
/// Evidence screenshot criterion and its fuzzy name validator.
pub mod evidence;
/// Extra-credit evaluator.
pub mod extra;
/// Frontend Vaadin criterion.
pub mod frontend;
/// Version-control workflow criterion.
pub mod gitflow;
/// Container and CI packaging criterion.
pub mod packaging;
/// Shared grade result types.
pub mod results;

use std::{path::Path, path::PathBuf, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;

pub use aggregate::{GradeSummary, combine_total, grade_all};
pub use backend::BackendGrader;
pub use evidence::{EvidenceGrader, matches_evidence};
pub use extra::ExtraCreditGrader;
pub use frontend::FrontendGrader;
pub use gitflow::GitflowGrader;
pub use packaging::PackagingGrader;
pub use results::{Grade, GradeResult};
pub use tests::BackendTestGrader;

use crate::probes::{SystemRunner, ToolRunner};

/// Read-only handle handed to every evaluator: the repository root plus the
/// tool runner used for git and Maven probes.
#[derive(Clone)]
pub struct GradeContext {
    /// Root of the repository under evaluation.
    root:   PathBuf,
    /// Executes external tools; swapped for a fake in tests.
    runner: Arc<dyn ToolRunner>,
}

impl GradeContext {
    /// Creates a context that runs real tools from the search path.
    pub fn new(root: PathBuf) -> Self {
        Self::with_runner(root, Arc::new(SystemRunner))
    }

    /// Creates a context with an explicit tool runner.
    pub fn with_runner(root: PathBuf, runner: Arc<dyn ToolRunner>) -> Self {
        Self { root, runner }
    }

    /// Root of the repository under evaluation.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// The tool runner used for external probes.
    pub fn runner(&self) -> &dyn ToolRunner {
        self.runner.as_ref()
    }
}

/// One rubric criterion. Implementations are independent, read-only over the
/// repository, and absorb every anticipated failure into a zero or reduced
/// [`GradeResult`]; only unanticipated errors may escape.
#[async_trait]
pub trait Grader: Send + Sync {
    /// Display label of the criterion.
    fn requirement(&self) -> &'static str;

    /// Maximum grade this criterion can award.
    fn out_of(&self) -> f64;

    /// Evaluates the criterion against the repository.
    async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult>;
}
