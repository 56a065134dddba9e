#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::Result;
use async_trait::async_trait;

use super::{
    GradeContext, Grader,
    results::{Grade, GradeResult, join_issues},
};
use crate::{
    config,
    probes::{ProbeError, ProbeOutput},
};

/// Maximum grade for the version-control workflow criterion.
const OUT_OF: f64 = 1.0;

/// Awards partial credit for a GitFlow-shaped history: a develop branch, at
/// least two feature branches, a release branch, and a `v1.0.0` tag.
#[derive(Debug, Default, Clone)]
pub struct GitflowGrader;

impl GitflowGrader {
    /// Builds the zero-or-reduced result for a probe that never produced an
    /// exit status. A missing git scores zero; a timeout scores a fixed 0.5,
    /// since the repository may well be fine.
    fn probe_failure(e: ProbeError) -> GradeResult {
        let (grade, reason) = match &e {
            ProbeError::ToolMissing(_) => (0.0, "git is not installed".to_string()),
            ProbeError::TimedOut(..) => (0.5, "timed out running git commands".to_string()),
            ProbeError::Spawn(..) => (0.0, format!("could not run git: {e}")),
        };

        GradeResult::builder()
            .requirement("GitFlow")
            .grade(Grade::new(grade, OUT_OF))
            .reason(reason)
            .build()
    }
}

#[async_trait]
impl Grader for GitflowGrader {
    fn requirement(&self) -> &'static str {
        "GitFlow"
    }

    fn out_of(&self) -> f64 {
        OUT_OF
    }

    async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult> {
        let mut score: f64 = 0.0;
        let mut issues: Vec<String> = Vec::new();

        if !ctx.root().join(".git").exists() {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.0, OUT_OF))
                .reason("no git repository initialized")
                .build());
        }

        let branches: ProbeOutput = match ctx
            .runner()
            .run("git", &["branch", "-a"], ctx.root(), config::GIT_TIMEOUT)
            .await
        {
            Ok(output) => output,
            Err(e) => return Ok(Self::probe_failure(e)),
        };

        if !branches.success {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.5, OUT_OF))
                .reason("git branch failed")
                .build());
        }

        let branches = branches.stdout.to_lowercase();

        if branches.contains("develop") {
            score += 0.3;
        } else {
            issues.push("missing develop branch".to_string());
        }

        let feature_count = branches.matches("feature/").count();
        if feature_count >= 2 {
            score += 0.4;
        } else if feature_count == 1 {
            score += 0.2;
            issues.push("only 1 feature branch (at least 2 required)".to_string());
        } else {
            issues.push("missing feature branches".to_string());
        }

        if branches.contains("release/") {
            score += 0.2;
        } else {
            issues.push("missing release branch".to_string());
        }

        match ctx
            .runner()
            .run("git", &["tag"], ctx.root(), config::GIT_TIMEOUT)
            .await
        {
            Ok(tags) if tags.success => {
                if tags.stdout.to_lowercase().contains("v1.0.0") {
                    score += 0.1;
                } else {
                    issues.push("missing tag v1.0.0".to_string());
                }
            }
            // A failed tag listing simply forfeits the tag credit.
            Ok(_) => {}
            Err(e @ ProbeError::TimedOut(..)) => return Ok(Self::probe_failure(e)),
            Err(_) => {}
        }

        Ok(GradeResult::builder()
            .requirement(self.requirement())
            .grade(Grade::new(score.min(OUT_OF), OUT_OF))
            .reason(join_issues(&issues))
            .build())
    }
}
