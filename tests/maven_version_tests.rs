mod support;

use rubrica::maven::{detect_java_version, parse_java_version};
use support::write_file;
use tempfile::tempdir;

#[test]
fn plain_versions_parse() {
    assert_eq!(parse_java_version("17"), Some(17));
    assert_eq!(parse_java_version("  21 "), Some(21));
    assert_eq!(parse_java_version("21.0"), Some(21));
}

#[test]
fn legacy_one_dot_numbering_maps_to_minor() {
    assert_eq!(parse_java_version("1.8"), Some(8));
}

#[test]
fn placeholders_and_junk_do_not_parse() {
    assert_eq!(parse_java_version("${java.version}"), None);
    assert_eq!(parse_java_version(""), None);
    assert_eq!(parse_java_version("latest"), None);
}

#[test]
fn structured_pom_reports_the_maximum_version() {
    let dir = tempdir().expect("create temp dir");
    write_file(
        dir.path(),
        "pom.xml",
        r#"<project>
  <properties>
    <java.version>11</java.version>
    <maven.compiler.release>17</maven.compiler.release>
  </properties>
</project>"#,
    );

    assert_eq!(detect_java_version(&dir.path().join("pom.xml")), Some(17));
}

#[test]
fn placeholder_values_fall_through_to_other_leaves() {
    let dir = tempdir().expect("create temp dir");
    write_file(
        dir.path(),
        "pom.xml",
        r#"<project>
  <properties>
    <java.version>${java.version}</java.version>
    <maven.compiler.target>1.8</maven.compiler.target>
  </properties>
</project>"#,
    );

    assert_eq!(detect_java_version(&dir.path().join("pom.xml")), Some(8));
}

#[test]
fn malformed_xml_falls_back_to_regex() {
    let dir = tempdir().expect("create temp dir");
    // Unclosed <dependencies> makes the structured pass fail outright.
    write_file(
        dir.path(),
        "pom.xml",
        "<project><dependencies><properties><java.version>17</java.version></properties></project>",
    );

    assert_eq!(detect_java_version(&dir.path().join("pom.xml")), Some(17));
}

#[test]
fn regex_fallback_tolerates_namespace_prefixes() {
    let dir = tempdir().expect("create temp dir");
    write_file(
        dir.path(),
        "pom.xml",
        "not really xml <mvn:maven.compiler.source>21</mvn:maven.compiler.source>",
    );

    assert_eq!(detect_java_version(&dir.path().join("pom.xml")), Some(21));
}

#[test]
fn pom_without_version_leaves_reports_none() {
    let dir = tempdir().expect("create temp dir");
    write_file(dir.path(), "pom.xml", "<project><dependencies/></project>");

    assert_eq!(detect_java_version(&dir.path().join("pom.xml")), None);
}

#[test]
fn missing_pom_reports_none() {
    let dir = tempdir().expect("create temp dir");
    assert_eq!(detect_java_version(&dir.path().join("pom.xml")), None);
}
