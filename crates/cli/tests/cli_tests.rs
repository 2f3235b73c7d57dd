//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("referent")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_extract_only_file() {
    cmd()
        .args(["--extract-only", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Researchers Demonstrate Practical Quantum Error Correction",
        ))
        .stdout(predicate::str::contains("2024-05-02"));
}

#[test]
fn test_cli_extract_only_stdin() {
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();
    cmd()
        .args(["--extract-only", "-"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("logical qubit"));
}

#[test]
fn test_cli_extract_only_reports_sentinels() {
    cmd()
        .args(["--extract-only", &get_fixture_path("empty_content.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Не найдено"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("article.json");

    cmd()
        .args(["--extract-only", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"title\""));
    assert!(written.contains("\"content\""));
}

#[test]
fn test_cli_invalid_file() {
    cmd().args(["--extract-only", "nonexistent.html"]).assert().failure();
}

#[test]
fn test_cli_invalid_action() {
    cmd()
        .args(["-a", "poem", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("poem"));
}

#[test]
fn test_cli_missing_api_key() {
    // Translation requires a credential; extraction alone does not.
    cmd()
        .env_remove("OPENROUTER_API_KEY")
        .arg(get_fixture_path("article.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENROUTER_API_KEY"));
}

#[test]
fn test_cli_verbose_extract() {
    cmd()
        .args(["-v", "--extract-only", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Referent"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--extract-only"))
        .stdout(predicate::str::contains("--action"));
}
