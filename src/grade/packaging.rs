#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashSet, path::PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use super::{
    GradeContext, Grader,
    results::{Grade, GradeResult, join_issues},
};
use crate::{config, util::read_text_safe};

/// Maximum grade for the packaging and CI criterion.
const OUT_OF: f64 = 2.0;

/// Portion of the criterion reserved for the CI workflow sub-score.
const WORKFLOW_CAP: f64 = 0.6;

/// Service-name aliases accepted for the database role in a compose file.
const DB_ALIASES: [&str; 5] = ["db", "database", "mysql", "mariadb", "postgres"];

/// Checks the container orchestration descriptor, the per-component
/// Dockerfiles, and the CI workflow contents.
#[derive(Debug, Default, Clone)]
pub struct PackagingGrader;

impl PackagingGrader {
    /// Scores the compose file: presence, service count, and whether the
    /// backend/frontend/db roles are all covered.
    fn score_compose(
        content: &str,
        issues: &mut Vec<String>,
    ) -> f64 {
        let mut score = 0.3; // file present

        let service_names: HashSet<String> = config::compose_service_regex()
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str().to_string())
            .collect();

        if service_names.len() >= 3 {
            score += 0.3;
        } else {
            issues.push("docker-compose.yml declares fewer than 3 services".to_string());
        }

        let has_backend = service_names.contains("backend");
        let has_frontend = service_names.contains("frontend");
        let has_db = DB_ALIASES
            .iter()
            .any(|alias| service_names.contains(*alias));

        if has_backend && has_frontend && has_db {
            score += 0.3;
        } else {
            issues.push(
                "docker-compose.yml must declare backend/frontend/db services".to_string(),
            );
        }

        score
    }

    /// Scores the CI workflow contents on its capped sub-scale.
    fn score_workflow(content: &str, issues: &mut Vec<String>) -> f64 {
        let mut score = 0.2; // file present

        if content.contains("actions/setup-java") && content.contains("17") {
            score += 0.2;
        } else {
            issues.push("workflow does not set up Java 17".to_string());
        }

        if content.contains("mvn test") && content.contains("backend") {
            score += 0.1;
        } else {
            issues.push("workflow must run mvn test in backend/".to_string());
        }

        if content.contains("rubrica") {
            score += 0.2;
        } else {
            issues.push("workflow does not run the rubrica grader".to_string());
        }

        if content.contains("actions/checkout") {
            score += 0.1;
        } else {
            issues.push("workflow must use actions/checkout".to_string());
        }

        score
    }
}

#[async_trait]
impl Grader for PackagingGrader {
    fn requirement(&self) -> &'static str {
        "Docker & CI"
    }

    fn out_of(&self) -> f64 {
        OUT_OF
    }

    async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult> {
        let mut score = 0.0;
        let mut issues: Vec<String> = Vec::new();
        let mut evidence: Vec<PathBuf> = Vec::new();

        let compose_path = ctx.root().join("docker-compose.yml");
        if compose_path.exists() {
            evidence.push(compose_path.clone());
            let content = read_text_safe(&compose_path);
            score += Self::score_compose(&content, &mut issues);
        } else {
            issues.push("no docker-compose.yml at the repository root".to_string());
        }

        for component in ["backend", "frontend"] {
            let dockerfile = ctx.root().join(component).join("Dockerfile");
            if dockerfile.exists() {
                score += 0.3;
                evidence.push(dockerfile);
            } else {
                issues.push(format!("missing {component}/Dockerfile"));
            }
        }

        let workflow_path = ctx.root().join(config::WORKFLOW_PATH);
        if workflow_path.exists() {
            evidence.push(workflow_path.clone());
            let content = read_text_safe(&workflow_path);
            score += Self::score_workflow(&content, &mut issues).min(WORKFLOW_CAP);
        } else {
            issues.push(format!("no {} workflow", config::WORKFLOW_PATH));
        }

        Ok(GradeResult::builder()
            .requirement(self.requirement())
            .grade(Grade::new(score.min(OUT_OF), OUT_OF))
            .reason(join_issues(&issues))
            .evidence(evidence)
            .build())
    }
}
