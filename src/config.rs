#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{sync::OnceLock, time::Duration};

use regex::Regex;

/// Assignment identifier written to every report row.
pub const ASSIGNMENT: &str = "P15";

/// Name of the report file written at the repository root.
pub const RESULTS_FILE: &str = "resultados.csv";

/// Column headers of the report file, in order.
pub const RESULTS_HEADERS: [&str; 4] = ["Usuario GitHub", "Practica", "Nota", "Comentarios"];

/// Maximum grade for the assignment; the grand total is capped here.
pub const MAX_GRADE: f64 = 10.0;

/// Cap applied to the extra-credit pool before it is added to the base sum.
pub const MAX_EXTRA: f64 = 1.5;

/// Directory names never descended into while scanning the repository.
pub const EXCLUDED_DIRS: [&str; 7] = [
    ".git",
    ".github",
    "__pycache__",
    "node_modules",
    "target",
    "grades",
    "ejemplos",
];

/// Image extensions accepted as evidence screenshots.
pub const IMG_EXTS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Evidence images smaller than this are treated as placeholders and skipped.
pub const MIN_IMAGE_BYTES: u64 = 1000;

/// Required evidence items and the points each is worth, awarded once.
pub const REQUIRED_EVIDENCE: [(&str, f64); 4] = [
    ("ui_frontend", 0.25),
    ("tests_ok", 0.25),
    ("actions_ci", 0.25),
    ("docker_ps", 0.25),
];

/// Bonus evidence items, awarded once each within the criterion's cap.
pub const BONUS_EVIDENCE: [(&str, f64); 2] = [("gitflow_branches", 0.1), ("compose_logs", 0.1)];

/// Minimum Java version expected in the backend descriptor.
pub const MIN_JAVA_VERSION: u32 = 17;

/// Deadline for each git invocation.
pub const GIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for `mvn test`, bounded well above a typical suite run.
pub const MVN_TIMEOUT: Duration = Duration::from_secs(180);

/// How many trailing characters of captured stderr are kept for reporting.
pub const STDERR_TAIL: usize = 400;

/// How many issues a criterion reports before truncating.
pub const MAX_ISSUES: usize = 3;

/// Path of the CI workflow descriptor, relative to the repository root.
pub const WORKFLOW_PATH: &str = ".github/workflows/check_p15.yml";

/// Matches service names in a compose file, two-space indented `name:` lines.
pub fn compose_service_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s{2,}([A-Za-z0-9_-]+):\s*$").expect("valid regex"))
}

/// Matches version leaf elements in raw pom.xml text, tolerating namespace
/// prefixes on the tag name.
pub fn version_leaf_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<(?:[\w\-.]+:)?(?:java\.version|maven\.compiler\.(?:release|target|source))>([^<]+)<")
            .expect("valid regex")
    })
}

/// Matches the first numeric token of a version string, one dot at most.
pub fn version_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"))
}

/// Matches suffixes tolerated after an expected evidence name.
pub fn evidence_suffix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(_v?\d+|_final|_last|_complete)?$").expect("valid regex"))
}

/// Collapses runs of separators when normalizing evidence names.
pub fn separator_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_\s]+").expect("valid regex"))
}

/// Strips known assignment prefixes from a repository name when deriving the
/// student identifier.
pub fn repo_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(?:dis[_-]?)?p15[_-]?").expect("valid regex"))
}
