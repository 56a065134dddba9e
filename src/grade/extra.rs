#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::Result;

use super::{GradeContext, results::Grade, results::GradeResult};
use crate::{
    config,
    util::{find_files, read_text_safe},
};

/// Cap on the extra-credit pool.
const OUT_OF: f64 = config::MAX_EXTRA;

/// CI keywords that indicate an image is being published or deployed.
const DEPLOY_MARKERS: [&str; 4] = ["deploy", "build-push-action", "ghcr.io", "docker/login-action"];

/// Vaadin components beyond the basic grid that indicate an advanced UI.
const ADVANCED_COMPONENTS: [&str; 5] = ["Dialog", "ComboBox", "Binder", "GridPro", "Charts"];

/// Awards up to +1.5 for improvements beyond the rubric: coverage tooling,
/// deployment/publishing from CI, and advanced frontend components. Not part
/// of the 10-point base; the aggregator adds it after capping.
#[derive(Debug, Default, Clone)]
pub struct ExtraCreditGrader;

impl ExtraCreditGrader {
    /// Display label for the extra-credit line.
    pub fn requirement(&self) -> &'static str {
        "Extra"
    }

    /// Evaluates the extra-credit pool against the repository.
    pub async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult> {
        let mut score: f64 = 0.0;
        let mut improvements: Vec<&str> = Vec::new();

        let workflow_path = ctx.root().join(config::WORKFLOW_PATH);
        let workflow_content = if workflow_path.exists() {
            read_text_safe(&workflow_path)
        } else {
            String::new()
        };
        let workflow_lower = workflow_content.to_lowercase();

        let backend_pom = ctx.root().join("backend").join("pom.xml");
        let pom_content = if backend_pom.exists() {
            read_text_safe(&backend_pom)
        } else {
            String::new()
        };

        if pom_content.to_lowercase().contains("jacoco") || workflow_lower.contains("coverage") {
            score += 0.5;
            improvements.push("coverage configured");
        }

        if DEPLOY_MARKERS
            .iter()
            .any(|marker| workflow_lower.contains(marker))
        {
            score += 0.5;
            improvements.push("deployment / image publishing in CI");
        }

        let frontend_dir = ctx.root().join("frontend");
        let frontend_sources = if frontend_dir.exists() {
            find_files(&frontend_dir, &["**/*.java"], &config::EXCLUDED_DIRS)
        } else {
            Vec::new()
        };
        let frontend_content: String = frontend_sources
            .iter()
            .map(|file| read_text_safe(file))
            .collect();

        if ADVANCED_COMPONENTS
            .iter()
            .any(|component| frontend_content.contains(component))
        {
            score += 0.5;
            improvements.push("advanced Vaadin UI");
        }

        let score = score.min(OUT_OF);
        let mut reason = format!("+{score:.1} pts");
        if !improvements.is_empty() {
            reason.push_str(&format!(" ({})", improvements.join(", ")));
        }

        Ok(GradeResult::builder()
            .requirement(self.requirement())
            .grade(Grade::new(score, OUT_OF))
            .reason(reason)
            .build())
    }
}
