//! Tests for the build pipeline: discovery, parallel parsing, full runs.

use super::*;
use std::fs;

fn write(dir: &std::path::Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    clean_path(&path.to_string_lossy())
}

#[test]
fn test_collect_source_files_filters_and_sorts() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    write(&dir, "Zeta.java", "class Zeta {}");
    write(&dir, "Alpha.java", "class Alpha {}");
    write(&dir, "notes.txt", "not source");
    write(&dir, "sub/Mid.java", "class Mid {}");

    let files =
        collect_source_files(&dir.to_string_lossy(), &["java".to_string()]).unwrap();
    assert_eq!(files.len(), 3);
    let names: Vec<_> = files
        .iter()
        .map(|f| std::path::Path::new(f).file_name().unwrap().to_string_lossy().to_string())
        .collect();
    // Sorted by full path: Alpha and Zeta at the root, Mid under sub/.
    assert_eq!(names, vec!["Alpha.java", "Zeta.java", "Mid.java"]);
}

#[test]
fn test_collect_source_files_extension_case_insensitive() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    write(&dir, "Upper.JAVA", "class Upper {}");
    let files =
        collect_source_files(&dir.to_string_lossy(), &["java".to_string()]).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_collect_source_files_missing_dir() {
    let err = collect_source_files("/no/such/dir/anywhere", &["java".to_string()]).unwrap_err();
    assert!(matches!(err, LocatorError::DirNotFound(_)));
}

#[test]
fn test_load_units_preserves_input_order_across_threads() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    let files: Vec<String> = (0..9)
        .map(|i| write(&dir, &format!("F{i}.java"), &format!("class F{i} {{}}")))
        .collect();

    let (units, failures) = load_units(&files, 3);
    assert!(failures.is_empty());
    assert_eq!(units.len(), files.len());
    for (unit, file) in units.iter().zip(&files) {
        assert_eq!(&unit.file, file);
    }
}

#[test]
fn test_load_units_unreadable_file_becomes_failure_note() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    let good = write(&dir, "Good.java", "class Good {}");
    let missing = dir.join("Missing.java").to_string_lossy().to_string();

    let (units, failures) = load_units(&[good.clone(), missing.clone()], 1);
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].file, good);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].file, missing);
    assert!(failures[0].error.contains("I/O error"));
}

#[test]
fn test_build_report_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    write(
        &dir,
        "Calculator.java",
        "class Calculator {\n    public int divide(int a, int b) {\n        return a / b;\n    }\n}\n",
    );
    write(
        &dir,
        "CalculatorTest.java",
        "class CalculatorTest {\n    void testDivide() {\n        int r = calculator.divide(6, 3);\n    }\n}\n",
    );

    let target = NameMatch::Exact("testDivide".to_string());
    let report = build_report(
        &dir.to_string_lossy(),
        &["java".to_string()],
        0,
        &target,
        &QueryOptions::default(),
    )
    .unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.declaration.name, "testDivide");
    assert_eq!(entry.declaration.line_range.start_line, 2);
    assert_eq!(entry.declaration.line_range.end_line, 4);
    assert_eq!(entry.invocations.len(), 1);
    assert_eq!(entry.invocations[0].callee, "divide");
    assert_eq!(entry.invocations[0].receiver_text, "calculator");
    assert_eq!(entry.invocations[0].argument_texts, vec!["6", "3"]);
}

#[test]
fn test_build_report_runs_are_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    for i in 0..5 {
        write(
            &dir,
            &format!("C{i}.java"),
            &format!("class C{i} {{\n    void helper() {{ step{i}(); }}\n}}\n"),
        );
    }
    let dir_str = dir.to_string_lossy().to_string();
    let target = NameMatch::Exact("helper".to_string());
    let options = QueryOptions::default();

    let first = build_report(&dir_str, &["java".to_string()], 2, &target, &options)
        .unwrap()
        .to_json()
        .unwrap();
    let second = build_report(&dir_str, &["java".to_string()], 4, &target, &options)
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_build_report_zero_matches_is_success() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    write(&dir, "A.java", "class A { void helper() {} }\n");

    let target = NameMatch::Exact("ghost".to_string());
    let report = build_report(
        &dir.to_string_lossy(),
        &["java".to_string()],
        0,
        &target,
        &QueryOptions::default(),
    )
    .unwrap();
    assert!(report.entries.is_empty());
    assert!(report.failures.is_empty());
}
