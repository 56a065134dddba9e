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
    maven::detect_java_version,
    util::{find_files, read_text_safe},
};

/// Maximum grade for the backend API criterion.
const OUT_OF: f64 = 2.0;

/// Database drivers accepted in the backend descriptor.
const DB_DRIVERS: [&str; 3] = ["mysql", "mariadb", "h2"];

/// Checks the backend project for a Spring Boot REST stack: web and JPA
/// starters, a database driver, and entity/repository/controller sources.
#[derive(Debug, Default, Clone)]
pub struct BackendGrader;

#[async_trait]
impl Grader for BackendGrader {
    fn requirement(&self) -> &'static str {
        "Backend API"
    }

    fn out_of(&self) -> f64 {
        OUT_OF
    }

    async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult> {
        let backend_dir = ctx.root().join("backend");
        let pom_path = backend_dir.join("pom.xml");
        let mut evidence: Vec<PathBuf> = Vec::new();

        if !backend_dir.exists() {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.0, OUT_OF))
                .reason("backend/ directory not found")
                .build());
        }
        if !pom_path.exists() {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.0, OUT_OF))
                .reason("backend/pom.xml not found")
                .build());
        }

        evidence.push(pom_path.clone());
        let pom_content = read_text_safe(&pom_path);

        let mut score: f64 = 0.0;
        let mut issues: Vec<String> = Vec::new();

        if pom_content.contains("spring-boot-starter-web") {
            score += 0.4;
        } else {
            issues.push("spring-boot-starter-web missing from backend/pom.xml".to_string());
        }

        if pom_content.contains("spring-boot-starter-data-jpa") {
            score += 0.4;
        } else {
            issues.push("spring-boot-starter-data-jpa missing from backend/pom.xml".to_string());
        }

        let pom_lower = pom_content.to_lowercase();
        if DB_DRIVERS.iter().any(|db| pom_lower.contains(db)) {
            score += 0.2;
        } else {
            issues.push("no database driver declared (H2/MySQL/MariaDB)".to_string());
        }

        if let Some(version) = detect_java_version(&pom_path) {
            if version < config::MIN_JAVA_VERSION {
                issues.push(format!("backend declares Java < 17 (found {version})"));
            }
        }

        let java_files = find_files(&backend_dir, &["**/*.java"], &config::EXCLUDED_DIRS);
        let mut has_entity = false;
        let mut has_repository = false;
        let mut has_rest_controller = false;

        for java_file in &java_files {
            let content = read_text_safe(java_file);
            if !has_entity && content.contains("@Entity") {
                has_entity = true;
                evidence.push(java_file.clone());
            }
            if !has_repository
                && content.contains("extends")
                && content.contains("JpaRepository")
            {
                has_repository = true;
                evidence.push(java_file.clone());
            }
            if !has_rest_controller
                && content.contains("@RestController")
                && content.contains("/api")
            {
                has_rest_controller = true;
                evidence.push(java_file.clone());
            }
        }

        if has_entity {
            score += 0.3;
        } else {
            issues.push("no @Entity class found in backend/".to_string());
        }

        if has_repository {
            score += 0.3;
        } else {
            issues.push("no repository extending JpaRepository found".to_string());
        }

        if has_rest_controller {
            score += 0.4;
        } else {
            issues.push("no @RestController with an /api route found".to_string());
        }

        Ok(GradeResult::builder()
            .requirement(self.requirement())
            .grade(Grade::new(score.min(OUT_OF), OUT_OF))
            .reason(join_issues(&issues))
            .evidence(evidence)
            .build())
    }
}
