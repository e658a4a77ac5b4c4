mod common;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn prints_counts_with_sum() {
    let fixture = TestFixture::new();
    fixture.create_source("main.go", "package main\n\n// hello\nfunc main() {}\n");

    let output = tokount!().arg(fixture.source_dir()).output().unwrap();

    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["Go"]["nFiles"], 1);
    assert_eq!(stats["Go"]["code"], 2);
    assert_eq!(stats["Go"]["comment"], 1);
    assert_eq!(stats["Go"]["blank"], 1);
    assert_eq!(stats["SUM"]["code"], 2);
}

#[test]
fn excluded_dirs_argument() {
    let fixture = TestFixture::new();
    fixture.create_source("a.js", "let a;\n");
    fixture.create_source("node_modules/b.js", "let b;\nlet c;\n");
    fixture.create_source("dist/c.js", "let d;\n");

    let output = tokount!()
        .arg(fixture.source_dir())
        .arg("node_modules,dist")
        .output()
        .unwrap();

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["JavaScript"]["code"], 1);
}

#[test]
fn missing_path_reports_structured_error() {
    let fixture = TestFixture::new();

    tokount!()
        .arg(fixture.path().join("nope"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"kind\":\"path_not_found\""));
}
