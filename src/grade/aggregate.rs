#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use anyhow::Result;
use itertools::Itertools;

use super::{
    BackendGrader, BackendTestGrader, EvidenceGrader, ExtraCreditGrader, FrontendGrader,
    GitflowGrader, GradeContext, Grader, PackagingGrader, results::GradeResult,
};
use crate::config;

/// The finished evaluation: per-criterion results, the capped extra pool, and
/// the bounded total with its persisted comment string.
pub struct GradeSummary {
    /// Per-criterion results in rubric order, each pre-capped to its maximum.
    pub results: Vec<GradeResult>,
    /// The extra-credit result, capped to its own pool.
    pub extra:   GradeResult,
    /// Final grade, `min(10.0, base + extra)`.
    pub total:   f64,
    /// Semicolon-joined `label: score/max` segments, the persisted comment.
    pub comment: String,
}

impl GradeSummary {
    /// All evidence files across criteria, deduplicated and sorted.
    pub fn evidence(&self) -> Vec<PathBuf> {
        self.results
            .iter()
            .flat_map(|result| result.evidence().iter().cloned())
            .sorted()
            .dedup()
            .collect()
    }
}

/// Combines a base subtotal (already pre-capped per criterion) with the
/// extra-credit pool: the pool is capped on its own, added, and the grand
/// total capped at the assignment maximum.
pub fn combine_total(base: f64, extra: f64) -> f64 {
    (base + extra.min(config::MAX_EXTRA)).min(config::MAX_GRADE)
}

/// The base rubric, in the order criteria are evaluated and reported.
fn base_graders() -> Vec<Box<dyn Grader>> {
    vec![
        Box::new(GitflowGrader),
        Box::new(BackendGrader),
        Box::new(FrontendGrader),
        Box::new(BackendTestGrader),
        Box::new(PackagingGrader),
        Box::new(EvidenceGrader),
    ]
}

/// Runs every criterion sequentially against the repository and combines the
/// results. Base criteria are individually pre-capped, so the base subtotal
/// cannot exceed the assignment maximum by construction; the extra pool is
/// capped on its own and added afterwards, and the grand total is capped
/// again as a final safety net. Extra credit raises a below-max score, never
/// exceeds the ceiling.
pub async fn grade_all(ctx: &GradeContext) -> Result<GradeSummary> {
    let mut results = Vec::new();

    for grader in base_graders() {
        tracing::info!("evaluating {}", grader.requirement());
        let result = grader.grade(ctx).await?;
        results.push(clamp(result));
    }

    let extra = clamp(ExtraCreditGrader.grade(ctx).await?);

    let base: f64 = results.iter().map(GradeResult::grade_value).sum();
    let extra_score = extra.grade_value().min(config::MAX_EXTRA);
    let total = combine_total(base, extra_score);

    let mut segments: Vec<String> = results
        .iter()
        .map(|result| format!("{}: {}", result.requirement(), result.grade_struct()))
        .collect();
    if extra_score > 0.0 {
        segments.push(format!("Extra: +{extra_score:.1}"));
    }
    let comment = segments.join("; ");

    Ok(GradeSummary {
        results,
        extra,
        total,
        comment,
    })
}

/// Clamps a result's grade into its `[0, out_of]` range.
fn clamp(mut result: GradeResult) -> GradeResult {
    result.grade = result.grade.clamped();
    result
}
