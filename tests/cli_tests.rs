//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn repo_prompt() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("repo-prompt"))
}

#[test]
fn test_cli_version() {
    let mut cmd = repo_prompt();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("repo-prompt"));
}

#[test]
fn test_cli_help_lists_subcommands() {
    let mut cmd = repo_prompt();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_export_requires_url() {
    let mut cmd = repo_prompt();
    cmd.arg("export");
    cmd.assert().failure().stderr(predicate::str::contains("URL"));
}

#[test]
fn test_export_rejects_non_hosting_url() {
    let mut cmd = repo_prompt();
    cmd.args(["export", "https://example.com/owner/name"]);
    cmd.assert().failure().stderr(predicate::str::contains("invalid repository URL"));
}

#[test]
fn test_export_rejects_url_without_owner_and_name() {
    let mut cmd = repo_prompt();
    cmd.args(["export", "https://github.com/onlyowner"]);
    cmd.assert().failure().stderr(predicate::str::contains("invalid repository URL"));
}

#[test]
fn test_export_rejects_unknown_strategy() {
    let mut cmd = repo_prompt();
    cmd.args(["export", "https://github.com/a/b", "--strategy", "ftp"]);
    cmd.assert().failure().stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn test_explicit_broken_config_fails() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("broken.toml");
    fs::write(&config, "strategy = [oops").expect("write config");

    let mut cmd = repo_prompt();
    cmd.args([
        "export",
        "https://github.com/a/b",
        "--config",
        config.to_str().expect("utf8 path"),
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid TOML"));
}

#[test]
fn test_completions_generate() {
    let mut cmd = repo_prompt();
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("repo-prompt"));
}

#[test]
fn test_info_rejects_invalid_url() {
    let mut cmd = repo_prompt();
    cmd.args(["info", "not-a-url"]);
    cmd.assert().failure().stderr(predicate::str::contains("invalid repository URL"));
}
