//! End-to-end checks of the `project-metadata` binary

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    run_with_env(args, &[])
}

fn run_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_project-metadata"))
        .args(args)
        .env_clear()
        .env("RUST_LOG", "error")
        .envs(vars.iter().copied())
        .output()
        .expect("binary should start")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn show_single_field() {
    let file = config_file("name = \"cli-project\"\ngithub_username = \"someone\"\n");
    let path = file.path().to_str().unwrap();

    let output = run(&["show", "--config", path, "--field", "project_website"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "https://someone.github.io/cli-project\n"
    );
}

#[test]
fn show_absent_field_prints_nothing() {
    let file = config_file("");
    let path = file.path().to_str().unwrap();

    let output = run(&[
        "show",
        "--config",
        path,
        "--field",
        "project_paypal_donate_button_snipplet",
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn show_whole_record_as_json() {
    let file = config_file("");
    let path = file.path().to_str().unwrap();

    let output = run(&["show", "--config", path]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project_name"], "demos-linux");
    assert_eq!(json["project_keywords"].as_array().unwrap().len(), 9);
}

#[test]
fn unknown_field_fails() {
    let file = config_file("");
    let path = file.path().to_str().unwrap();

    let output = run(&["show", "--config", path, "--field", "project_author"]);
    assert!(!output.status.success());
}

#[test]
fn validate_reports_bad_year() {
    let file = config_file("year_started = \"20x1\"\n");
    let path = file.path().to_str().unwrap();

    let output = run(&["validate", "--config", path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid start year '20x1'"));
}

#[test]
fn fields_lists_every_key() {
    let output = run(&["fields"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 17);
    assert_eq!(names[0], "project_github_username");
    assert_eq!(names[16], "project_paypal_donate_button_snipplet");
}

#[test]
fn environment_overrides_config_file() {
    let file = config_file("name = \"from-file\"\n");
    let path = file.path().to_str().unwrap();

    let output = run_with_env(
        &["show", "--config", path, "--field", "project_name"],
        &[("PROJECT_NAME", "007")],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "007\n");
}
