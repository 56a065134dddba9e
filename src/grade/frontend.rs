#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use super::{
    GradeContext, Grader,
    results::{Grade, GradeResult, join_issues},
};
use crate::{
    config,
    util::{find_files, read_text_safe},
};

/// Maximum grade for the frontend criterion.
const OUT_OF: f64 = 2.0;

/// HTTP client types accepted in frontend sources.
const HTTP_CLIENTS: [&str; 3] = ["RestTemplate", "WebClient", "HttpClient"];

/// Checks the frontend project for Vaadin 24 plus a routed view, a data grid,
/// and an HTTP client talking to the backend.
#[derive(Debug, Default, Clone)]
pub struct FrontendGrader;

#[async_trait]
impl Grader for FrontendGrader {
    fn requirement(&self) -> &'static str {
        "Frontend Vaadin"
    }

    fn out_of(&self) -> f64 {
        OUT_OF
    }

    async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult> {
        let frontend_dir = ctx.root().join("frontend");
        let pom_path = frontend_dir.join("pom.xml");
        let mut evidence: Vec<PathBuf> = Vec::new();

        if !frontend_dir.exists() {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.0, OUT_OF))
                .reason("frontend/ directory not found")
                .build());
        }
        if !pom_path.exists() {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.0, OUT_OF))
                .reason("frontend/pom.xml not found")
                .build());
        }

        evidence.push(pom_path.clone());
        let pom_content = read_text_safe(&pom_path).to_lowercase();

        let mut score: f64 = 0.0;
        let mut issues: Vec<String> = Vec::new();

        if pom_content.contains("vaadin")
            && (pom_content.contains("24.") || pom_content.contains("<vaadin.version>24"))
        {
            score += 0.5;
        } else {
            issues.push("frontend/pom.xml does not declare Vaadin 24".to_string());
        }

        let java_files = find_files(&frontend_dir, &["**/*.java"], &config::EXCLUDED_DIRS);
        let mut has_route = false;
        let mut has_grid = false;
        let mut has_http_client = false;

        for java_file in &java_files {
            let content = read_text_safe(java_file);
            if !has_route && content.contains("@Route") {
                has_route = true;
                evidence.push(java_file.clone());
            }
            if !has_grid && content.contains("Grid<") {
                has_grid = true;
                evidence.push(java_file.clone());
            }
            if !has_http_client && HTTP_CLIENTS.iter().any(|client| content.contains(client)) {
                has_http_client = true;
                evidence.push(java_file.clone());
            }
        }

        if has_route {
            score += 0.5;
        } else {
            issues.push("no view annotated with @Route found".to_string());
        }

        if has_grid {
            score += 0.5;
        } else {
            issues.push("no Grid displaying data found".to_string());
        }

        if has_http_client {
            score += 0.5;
        } else {
            issues.push("no HTTP client found in frontend/".to_string());
        }

        Ok(GradeResult::builder()
            .requirement(self.requirement())
            .grade(Grade::new(score.min(OUT_OF), OUT_OF))
            .reason(join_issues(&issues))
            .evidence(evidence)
            .build())
    }
}
