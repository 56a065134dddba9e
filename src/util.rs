#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fs, path::Path, path::PathBuf};

use glob::glob;

/// A glob utility function to find files matching any of the given patterns
/// under `root_dir`, discarding results that pass through an excluded
/// directory. Results are not deduplicated across patterns.
///
/// * `root_dir`: the root directory where the search starts
/// * `patterns`: glob patterns relative to `root_dir`, e.g. `**/*.java`
/// * `exclusions`: directory names never descended into
pub fn find_files(root_dir: &Path, patterns: &[&str], exclusions: &[&str]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for pattern in patterns {
        let full = root_dir.join(pattern);
        let Some(full) = full.to_str().map(String::from) else {
            continue;
        };
        let Ok(paths) = glob(&full) else {
            continue;
        };

        for path in paths.filter_map(Result::ok) {
            let excluded = path.components().any(|part| {
                part.as_os_str()
                    .to_str()
                    .is_some_and(|name| exclusions.contains(&name))
            });
            if !excluded {
                found.push(path);
            }
        }
    }

    found
}

/// Reads a file as text, trying UTF-8 first and falling back to Latin-1 on
/// invalid byte sequences. Returns an empty string on any I/O failure, so
/// callers must treat empty as "unreadable" rather than "empty file".
pub fn read_text_safe(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            // Latin-1 maps every byte to the code point of the same value.
            Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
        },
        Err(_) => String::new(),
    }
}

/// Keeps at most the trailing `limit` characters of `text`, respecting char
/// boundaries.
pub fn tail(text: &str, limit: usize) -> &str {
    let count = text.chars().count();
    if count <= limit {
        return text;
    }
    let (idx, _) = text.char_indices().nth(count - limit).unwrap_or((0, ' '));
    &text[idx..]
}
