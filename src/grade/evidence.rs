#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashSet, fs, path::PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use super::{
    GradeContext, Grader,
    results::{Grade, GradeResult},
};
use crate::{config, util::find_files};

/// Maximum grade for the evidence criterion; bonus items add within this cap.
const OUT_OF: f64 = 1.0;

/// Validates a submitted evidence filename against an expected logical name.
///
/// Case-insensitive and whitespace-trimmed. Deliberately permissive on
/// separators but strict on the core token: an exact match, a prefix match
/// whose remainder is a tolerated suffix (`_v2`, `_3`, `_final`, `_last`,
/// `_complete`), or equality after collapsing separator runs to `_`.
pub fn matches_evidence(actual: &str, expected: &str) -> bool {
    let actual = actual.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();

    if actual == expected {
        return true;
    }

    if let Some(remainder) = actual.strip_prefix(expected.as_str()) {
        if config::evidence_suffix_regex().is_match(remainder) {
            return true;
        }
    }

    let normalized_actual = config::separator_run_regex().replace_all(&actual, "_");
    let normalized_expected = config::separator_run_regex().replace_all(&expected, "_");

    normalized_actual == normalized_expected
        || normalized_actual.starts_with(&format!("{normalized_expected}_"))
}

/// Scans `evidencias/` for screenshots and awards each logical evidence item
/// its point value once, on first fuzzy filename match.
#[derive(Debug, Default, Clone)]
pub struct EvidenceGrader;

#[async_trait]
impl Grader for EvidenceGrader {
    fn requirement(&self) -> &'static str {
        "Evidence"
    }

    fn out_of(&self) -> f64 {
        OUT_OF
    }

    async fn grade(&self, ctx: &GradeContext) -> Result<GradeResult> {
        let evidence_dir = ctx.root().join("evidencias");

        if !evidence_dir.exists() {
            return Ok(GradeResult::builder()
                .requirement(self.requirement())
                .grade(Grade::new(0.0, OUT_OF))
                .reason("evidencias/ directory not found")
                .build());
        }

        let patterns: Vec<String> = config::IMG_EXTS
            .iter()
            .map(|ext| format!("*.{ext}"))
            .collect();
        let pattern_refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
        let images = find_files(&evidence_dir, &pattern_refs, &config::EXCLUDED_DIRS);

        let mut score = 0.0;
        let mut found_required: HashSet<&str> = HashSet::new();
        let mut found_bonus: HashSet<&str> = HashSet::new();
        let mut found_images: Vec<PathBuf> = Vec::new();

        for image in images {
            // Near-empty files are placeholders, not screenshots.
            let size = fs::metadata(&image).map(|m| m.len()).unwrap_or(0);
            if size < config::MIN_IMAGE_BYTES {
                continue;
            }

            let stem = image
                .file_stem()
                .map(|s| s.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            found_images.push(image.clone());

            for (name, points) in config::REQUIRED_EVIDENCE {
                if matches_evidence(&stem, name) {
                    if found_required.insert(name) {
                        score += points;
                    }
                    break;
                }
            }

            for (name, points) in config::BONUS_EVIDENCE {
                if matches_evidence(&stem, name) {
                    if found_bonus.insert(name) {
                        score += points;
                    }
                    break;
                }
            }
        }

        let found_list: Vec<&str> = config::REQUIRED_EVIDENCE
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| found_required.contains(name))
            .collect();
        let missing_list: Vec<&str> = config::REQUIRED_EVIDENCE
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !found_required.contains(name))
            .collect();

        let mut reason = format!("{}/4 required", found_required.len());
        if !found_list.is_empty() {
            reason.push_str(&format!(" ({})", found_list.join(", ")));
        }
        if !missing_list.is_empty() {
            reason.push_str(&format!("; missing: {}", missing_list.join(", ")));
        }
        if !found_bonus.is_empty() {
            let mut bonus: Vec<&str> = found_bonus.into_iter().collect();
            bonus.sort_unstable();
            reason.push_str(&format!("; bonus: {}", bonus.join(", ")));
        }

        Ok(GradeResult::builder()
            .requirement(self.requirement())
            .grade(Grade::new(score.min(OUT_OF), OUT_OF))
            .reason(reason)
            .evidence(found_images)
            .build())
    }
}
