mod support;

use rubrica::{config::EXCLUDED_DIRS, util::find_files, util::read_text_safe, util::tail};
use support::write_file;
use tempfile::tempdir;

#[test]
fn finds_files_matching_a_pattern() {
    let dir = tempdir().expect("create temp dir");
    write_file(dir.path(), "src/Main.java", "class Main {}");
    write_file(dir.path(), "src/deep/Service.java", "class Service {}");
    write_file(dir.path(), "readme.md", "# readme");

    let found = find_files(dir.path(), &["**/*.java"], &EXCLUDED_DIRS);
    assert_eq!(found.len(), 2);
}

#[test]
fn excluded_directories_are_never_returned() {
    let dir = tempdir().expect("create temp dir");
    write_file(dir.path(), "target/Generated.java", "class Generated {}");
    write_file(dir.path(), "node_modules/dep/Dep.java", "class Dep {}");
    write_file(dir.path(), "src/Main.java", "class Main {}");

    let found = find_files(dir.path(), &["**/*.java"], &EXCLUDED_DIRS);
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("src/Main.java"));
}

#[test]
fn results_are_not_deduplicated_across_patterns() {
    let dir = tempdir().expect("create temp dir");
    write_file(dir.path(), "Main.java", "class Main {}");

    let found = find_files(dir.path(), &["*.java", "**/*.java"], &EXCLUDED_DIRS);
    assert_eq!(found.len(), 2);
}

#[test]
fn read_text_safe_reads_utf8() {
    let dir = tempdir().expect("create temp dir");
    write_file(dir.path(), "a.txt", "hola ñandú");

    assert_eq!(read_text_safe(&dir.path().join("a.txt")), "hola ñandú");
}

#[test]
fn read_text_safe_falls_back_to_latin1() {
    let dir = tempdir().expect("create temp dir");
    // 0xF1 is ñ in Latin-1 and invalid on its own in UTF-8.
    std::fs::write(dir.path().join("a.txt"), [b'a', 0xF1, b'b']).expect("write bytes");

    assert_eq!(read_text_safe(&dir.path().join("a.txt")), "añb");
}

#[test]
fn read_text_safe_returns_empty_on_missing_file() {
    let dir = tempdir().expect("create temp dir");
    assert_eq!(read_text_safe(&dir.path().join("nope.txt")), "");
}

#[test]
fn tail_keeps_the_trailing_characters() {
    assert_eq!(tail("abcdef", 3), "def");
    assert_eq!(tail("ab", 3), "ab");
    assert_eq!(tail("añandú", 2), "dú");
}
