mod common;

use std::fs;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn help_lists_subcommands() {
    ghlang!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("local"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    ghlang!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    ghlang!().arg("bogus").assert().failure();
}

#[test]
fn config_path_prints_given_file() {
    let fixture = TestFixture::new();
    let config = fixture.config_path();

    ghlang!()
        .args(["config", "--path", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_hides_token() {
    let fixture = TestFixture::new();
    fixture.create_config("[github]\ntoken = \"ghp_very_secret\"\n");

    ghlang!()
        .args(["config", "--show", "--config"])
        .arg(fixture.config_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_very_secret").not())
        .stdout(predicate::str::contains("\"affiliation\""));
}

#[test]
fn config_show_invalid_toml_exits_2() {
    let fixture = TestFixture::new();
    fs::write(fixture.config_path(), "[github\n").unwrap();

    ghlang!()
        .args(["config", "--show", "--config"])
        .arg(fixture.config_path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid TOML"));
}

#[test]
fn github_without_token_creates_template_and_exits_2() {
    let fixture = TestFixture::new();
    let config = fixture.path().join("fresh/config.toml");

    ghlang!()
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG")
        .args(["github", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No GitHub token"));

    let template = fs::read_to_string(&config).unwrap();
    assert!(template.contains("YOUR_TOKEN_HERE"));
}

#[test]
fn github_placeholder_token_exits_2() {
    let fixture = TestFixture::new();
    fixture.create_config("[github]\ntoken = \"YOUR_TOKEN_HERE\"\n");

    ghlang!()
        .env_remove("GITHUB_TOKEN")
        .args(["github", "--config"])
        .arg(fixture.config_path())
        .assert()
        .code(2);
}

#[test]
fn github_invalid_toml_exits_2() {
    let fixture = TestFixture::new();
    fs::write(fixture.config_path(), "token = = 1").unwrap();

    ghlang!()
        .env("GITHUB_TOKEN", "x")
        .args(["github", "--config"])
        .arg(fixture.config_path())
        .assert()
        .code(2);
}

#[test]
fn github_unusable_token_exits_2_before_creating_output_dir() {
    let fixture = TestFixture::new();
    fixture.create_config("[github]\ntoken = \"tök\"\n");

    ghlang!()
        .env_remove("GITHUB_TOKEN")
        .args(["github", "--config"])
        .arg(fixture.config_path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid characters"));

    assert!(!fixture.output_dir().exists());
}
