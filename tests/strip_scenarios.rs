//! End-to-end stripping of files on disk
//!
//! Each test writes a fixture into a temp directory, runs the stripper
//! against it, and checks the rewritten file.

use fieldstrip::{strip, FieldPattern, FieldStripper, StripError, WriteMode};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("import-facts.js");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn strip_file(content: &str) -> String {
    let (_dir, path) = fixture(content);
    strip(&path).unwrap();
    fs::read_to_string(&path).unwrap()
}

const FACTS: &str = r#"const data = [
    { "date": "01-01", "history": "2002年1月1日，歐元開始流通。", "source": "維基百科、國家地理" },
    { "date": "01-02", "history": "1959年1月2日，月球1號發射。",
      "source": "維基百科" },
    { "date": "01-03", "animalFact": "游隼時速可達390公里。" }
];
"#;

// --- Scenario 1: field in the middle of an object ---

#[test]
fn middle_field_is_removed_with_its_comma() {
    let out = strip_file(r#"{"id": 1, "source": "web", "name": "x"}"#);
    assert_eq!(out, r#"{"id": 1, "name": "x"}"#);
}

// --- Scenario 2: field opens its object ---

#[test]
fn leading_field_leaves_the_following_comma() {
    // The rule only consumes a comma before the key, so the separator
    // after a leading field stays behind.
    let out = strip_file(r#"{"source": "web", "id": 1}"#);
    assert_eq!(out, r#"{, "id": 1}"#);
}

// --- Scenario 3: several objects in one file ---

#[test]
fn fields_in_separate_objects_are_removed_independently() {
    let out = strip_file(FACTS);
    let expected = r#"const data = [
    { "date": "01-01", "history": "2002年1月1日，歐元開始流通。" },
    { "date": "01-02", "history": "1959年1月2日，月球1號發射。" },
    { "date": "01-03", "animalFact": "游隼時速可達390公里。" }
];
"#;
    assert_eq!(out, expected);
}

// --- Scenario 4: nothing to remove ---

#[test]
fn document_without_field_is_byte_identical() {
    let input = "{ \"id\": 1,\r\n\t\"name\": \"x\" }\n\n// trailing comment\n";
    let (_dir, path) = fixture(input);
    let report = strip(&path).unwrap();
    assert_eq!(report.removed, 0);
    assert!(report.written);
    assert_eq!(fs::read(&path).unwrap(), input.as_bytes());
}

// --- Scenario 5: unterminated value ---

#[test]
fn unterminated_value_runs_to_next_quote() {
    let input = "{\"id\": 1, \"source\": \"web, \"name\": \"x\"}\n{\"id\": 2, \"source\": \"open";
    let (_dir, path) = fixture(input);
    strip(&path).unwrap();
    let out = fs::read_to_string(&path).unwrap();

    // The first value ends at the quote that opens "name", which goes with it.
    // The second value never closes and is left alone, as is its object.
    assert_eq!(out, "{\"id\": 1name\": \"x\"}\n{\"id\": 2, \"source\": \"open");
    assert!(out.contains("{\"id\": 2"));
    assert!(out.ends_with("\"source\": \"open"));
}

#[test]
fn lone_unterminated_value_is_untouched() {
    let input = r#"{"id": 1, "source": "never closed}"#;
    assert_eq!(strip_file(input), input);
}

// --- Properties ---

#[test]
fn stripping_twice_matches_stripping_once() {
    let (_dir, path) = fixture(FACTS);
    strip(&path).unwrap();
    let once = fs::read_to_string(&path).unwrap();

    let report = strip(&path).unwrap();
    let twice = fs::read_to_string(&path).unwrap();

    assert_eq!(once, twice);
    assert_eq!(report.removed, 0);
    assert!(report.written, "second pass still rewrites the file");
}

#[test]
fn no_occurrence_survives() {
    let out = strip_file(FACTS);
    assert!(!FieldPattern::source().is_match(&out));
    assert!(!out.contains("\"source\""));
}

#[test]
fn other_fields_keep_content_and_order() {
    let out = strip_file(FACTS);
    let keys: Vec<_> = ["\"date\": \"01-01\"", "\"history\"", "\"date\": \"01-02\"", "\"animalFact\""]
        .iter()
        .map(|k| out.find(k).unwrap_or_else(|| panic!("{k} missing")))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

// --- Configuration ---

#[test]
fn atomic_mode_produces_same_output() {
    let (_dir, path) = fixture(FACTS);
    FieldStripper::new()
        .with_write_mode(WriteMode::Atomic)
        .strip(&path)
        .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), strip_file(FACTS));
}

#[test]
fn custom_field_leaves_source_alone() {
    let (_dir, path) = fixture(r#"{"id": 1, "source": "web", "note": "tmp"}"#);
    let report = FieldStripper::new()
        .with_field("note")
        .unwrap()
        .strip(&path)
        .unwrap();
    assert_eq!(report.field, "note");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"id": 1, "source": "web"}"#
    );
}

// --- Failures ---

#[test]
fn missing_file_fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("import-facts.js");
    let err = strip(&path).unwrap_err();
    assert!(matches!(err, StripError::Read { .. }));
    assert!(!path.exists());
}

#[test]
fn non_utf8_file_is_left_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("import-facts.js");
    let bytes = b"{\"source\": \"\xff\"}".to_vec();
    fs::write(&path, &bytes).unwrap();

    let err = strip(&path).unwrap_err();
    assert!(matches!(err, StripError::Decode { .. }));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}
