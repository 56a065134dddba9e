#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use typed_builder::TypedBuilder;

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
/// A struct representing a grade
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }

    /// Returns a copy clamped to the `[0, out_of]` range.
    pub fn clamped(self) -> Self {
        Self {
            grade:  self.grade.clamp(0.0, self.out_of),
            out_of: self.out_of,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}/{:.1}", self.grade, self.out_of)
    }
}

#[derive(Tabled, Clone, Default, TypedBuilder, Serialize, Deserialize)]
#[builder(field_defaults(setter(into)))]
/// A struct to store the outcome of one rubric criterion and display it
pub struct GradeResult {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: display label of the rubric criterion
    pub(crate) requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: grade received for the above requirement
    #[builder(default)]
    pub(crate) grade:       Grade,
    #[tabled(rename = "Reason")]
    /// * `reason`: the issues found while evaluating, if any
    #[builder(default)]
    pub(crate) reason:      String,
    #[tabled(skip)]
    /// * `evidence`: the files that informed this score, in discovery order
    #[builder(default)]
    pub(crate) evidence:    Vec<PathBuf>,
}

impl GradeResult {
    /// Display label of the rubric criterion.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Returns the underlying grade struct.
    pub fn grade_struct(&self) -> &Grade {
        &self.grade
    }

    /// Returns the numeric grade value.
    pub fn grade_value(&self) -> f64 {
        self.grade.grade
    }

    /// Returns the numeric out-of value.
    pub fn out_of_value(&self) -> f64 {
        self.grade.out_of
    }

    /// Returns the issues found while evaluating.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the files that informed this score.
    pub fn evidence(&self) -> &[PathBuf] {
        &self.evidence
    }
}

/// Joins the first [`crate::config::MAX_ISSUES`] issues into a reason string.
pub fn join_issues(issues: &[String]) -> String {
    issues
        .iter()
        .take(crate::config::MAX_ISSUES)
        .cloned()
        .collect::<Vec<_>>()
        .join("; ")
}
