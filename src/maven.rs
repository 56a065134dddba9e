#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use crate::{config, util::read_text_safe};

/// Leaf elements that can declare the Java version in a pom.xml, checked in
/// priority order.
const VERSION_TAGS: [&str; 4] = [
    "java.version",
    "maven.compiler.release",
    "maven.compiler.target",
    "maven.compiler.source",
];

/// Converts a JVM version string into a comparable integer.
///
/// Trims whitespace, rejects unresolved property placeholders such as
/// `${java.version}`, and takes the first numeric token. Legacy `1.N`
/// numbering maps to `N`; anything else maps to its integer part.
pub fn parse_java_version(value: &str) -> Option<u32> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.starts_with("${") && cleaned.ends_with('}') {
        return None;
    }

    let token = config::version_token_regex().find(cleaned)?.as_str();

    if let Some(minor) = token.strip_prefix("1.") {
        return minor.parse().ok();
    }

    token.split('.').next()?.parse().ok()
}

/// Detects the Java version configured in a pom.xml, returning the maximum
/// across all version leaf elements, or `None` when nothing parses.
///
/// Tries a structured XML pass first, matching the leaf names across any
/// namespace. Malformed documents, or documents where the parser resolves no
/// usable leaf, fall back to a regex scan of the raw text that tolerates
/// namespace-prefixed tag names.
pub fn detect_java_version(pom_path: &Path) -> Option<u32> {
    let content = read_text_safe(pom_path);
    if content.is_empty() {
        return None;
    }

    let mut versions: Vec<u32> = Vec::new();

    if let Ok(doc) = roxmltree::Document::parse(&content) {
        for tag in VERSION_TAGS {
            versions.extend(
                doc.descendants()
                    .filter(|node| node.tag_name().name() == tag)
                    .filter_map(|node| node.text())
                    .filter_map(parse_java_version),
            );
        }
    }

    if versions.is_empty() {
        versions.extend(
            config::version_leaf_regex()
                .captures_iter(&content)
                .filter_map(|caps| caps.get(1))
                .filter_map(|value| parse_java_version(value.as_str())),
        );
    }

    versions.into_iter().max()
}
