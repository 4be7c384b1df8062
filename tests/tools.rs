//! End-to-end tests of the command-line tools.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

const STEP_SUMMARY: &str = "GITHUB_STEP_SUMMARY";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ui-tests.log")
}

fn tool(bin: &str) -> Command {
    let mut cmd = Command::new(bin);
    let _ = cmd.env_remove(STEP_SUMMARY);
    cmd
}

fn run(mut cmd: Command) -> (Output, String) {
    let output = cmd.output().expect("failed to spawn tool");
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    (output, stdout)
}

const MAKE_SUMMARY: &str = env!("CARGO_BIN_EXE_make-summary");
const SUMMARY_TABLE: &str = env!("CARGO_BIN_EXE_summary-table");
const REVIEW_FAILURES: &str = env!("CARGO_BIN_EXE_review-failures");

#[test]
fn make_summary_prints_every_block() {
    let mut cmd = tool(MAKE_SUMMARY);
    let _ = cmd.arg(fixture());
    let (output, stdout) = run(cmd);

    assert!(output.status.success());
    assert!(stdout.starts_with(
        "==== Summary app: react-native-81 | code version: 1.104.0 | os: macos ====\n\
         \x20 [CRITICAL PASSING PERCENTAGE]: 97.62%\n\
         \x20 [PASSING PERCENTAGE WITH SOFT FAILS]: 97.62%\n\
         \n\
         \x20 [PASSING]: 41\n\
         \x20 [SKIPPED]: 4\n\
         \x20 [FAILS]: 1\n\
         \x20 [SOFT FAILS]: 0\n",
    ));
    assert!(stdout.contains(
        "==== Summary app: expo-52 | code version: 1.104.0 | os: macos ====\n\
         \x20 [CRITICAL PASSING PERCENTAGE]: 100.00%\n\
         \x20 [PASSING PERCENTAGE WITH SOFT FAILS]: 95.00%\n",
    ));
    assert!(stdout.contains(
        "Soft Fails Details:\n\
         1) 2) [SOFT FAIL] shows the app switcher\n\
         2) 3) [SOFT FAIL] reloads the metro bundler\n",
    ));
    assert!(!stdout.contains("WebSocket server closed"));
    assert!(!stdout.contains("app launch output"));
    assert_eq!(stdout.matches("\n============\n").count(), 2);
}

#[test]
fn make_summary_ignores_step_summary() {
    let dir = tempfile::tempdir().unwrap();
    let summary = dir.path().join("summary.md");

    let mut cmd = tool(MAKE_SUMMARY);
    let _ = cmd.arg(fixture()).env(STEP_SUMMARY, &summary);
    let (output, stdout) = run(cmd);

    assert!(output.status.success());
    assert!(stdout.contains("[PASSING]: 41"));
    assert!(!summary.exists());
}

#[test]
fn summary_table_prints_rows() {
    let mut cmd = tool(SUMMARY_TABLE);
    let _ = cmd.arg(fixture());
    let (output, stdout) = run(cmd);

    assert!(output.status.success());
    assert_eq!(
        stdout,
        "\
### Test Results Overview

| App | Version | OS | Passing | Failing | Soft Fails | Critical % | Soft % |
| :--- | :--- | :--- | :---: | :---: | :---: | :---: | :---: |
| react-native-81 | 1.104.0 | macos | 41 | 1 | 0 | 🟡 97.62% | 🟡 97.62% |
| expo-52 | 1.104.0 | macos | 38 | 0 | 2 | 🟢 100.00% | 🟡 95.00% |
",
    );
}

#[test]
fn summary_table_appends_to_step_summary() {
    let dir = tempfile::tempdir().unwrap();
    let summary = dir.path().join("summary.md");
    fs::write(&summary, "# CI\n").unwrap();

    for _ in 0..2 {
        let mut cmd = tool(SUMMARY_TABLE);
        let _ = cmd.arg(fixture()).env(STEP_SUMMARY, &summary);
        let (output, stdout) = run(cmd);

        assert!(output.status.success());
        assert_eq!(stdout, "");
    }

    let written = fs::read_to_string(&summary).unwrap();
    assert!(written.starts_with("# CI\n### Test Results Overview\n"));
    assert_eq!(written.matches("| expo-52 |").count(), 2);
}

#[test]
fn summary_table_without_summaries() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("empty.log");
    fs::write(&log, "npm ERR! could not start the runner\n").unwrap();

    let mut cmd = tool(SUMMARY_TABLE);
    let _ = cmd.arg(&log);
    let (output, stdout) = run(cmd);

    assert!(output.status.success());
    assert_eq!(stdout, "No test summaries found in the log.\n");
}

#[test]
fn review_failures_prints_details() {
    let mut cmd = tool(REVIEW_FAILURES);
    let _ = cmd.arg(fixture());
    let (output, stdout) = run(cmd);

    assert!(output.status.success());
    assert!(stdout.starts_with(
        "## Detailed Failure Logs\n\
         ### Failure Details: react-native-81 (macos) (VSCode 1.104.0)\n\
         \n\
         **Critical Failures:**\n\
         ```text\n\
         1) Radon tools\n",
    ));
    assert!(stdout.contains(
        "      at /home/runner/work/ui-tests/node_modules/selenium-webdriver/lib/webdriver.js:929:17\n```\n",
    ));
    assert!(!stdout.contains("INFO: Screenshots"));
    assert!(stdout.contains(
        "### Failure Details: expo-52 (macos) (VSCode 1.104.0)\n\
         \n\
         **Soft Fails:**\n\
         - 2) [SOFT FAIL] shows the app switcher\n\
         - 3) [SOFT FAIL] reloads the metro bundler\n\
         \n\
         ---\n",
    ));
}

#[test]
fn review_failures_writes_nothing_without_failures() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("green.log");
    let summary = dir.path().join("summary.md");
    fs::write(
        &log,
        "==== Summary app: A | code version: 1 | os: linux ====\n  3 passing\n",
    )
    .unwrap();

    let mut cmd = tool(REVIEW_FAILURES);
    let _ = cmd.arg(&log).env(STEP_SUMMARY, &summary);
    let (output, stdout) = run(cmd);

    assert!(output.status.success());
    assert_eq!(stdout, "");
    assert!(!summary.exists());
}

#[test]
fn missing_argument_prints_usage() {
    for bin in [MAKE_SUMMARY, SUMMARY_TABLE, REVIEW_FAILURES] {
        let (output, stdout) = run(tool(bin));
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(2), "{bin}");
        assert!(stdout.is_empty());
        assert!(stderr.contains("Usage:"), "{bin}: {stderr}");
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("absent.log");

    for bin in [MAKE_SUMMARY, SUMMARY_TABLE, REVIEW_FAILURES] {
        let mut cmd = tool(bin);
        let _ = cmd.arg(&log);
        let (output, stdout) = run(cmd);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1), "{bin}");
        assert!(stdout.is_empty());
        assert!(
            stderr.contains(&format!("Error: file '{}' not found.", log.display())),
            "{bin}: {stderr}",
        );
    }
}

#[test]
fn reruns_are_idempotent() {
    for bin in [MAKE_SUMMARY, SUMMARY_TABLE, REVIEW_FAILURES] {
        let outputs = (0..2)
            .map(|_| {
                let mut cmd = tool(bin);
                let _ = cmd.arg(fixture());
                run(cmd).1
            })
            .collect::<Vec<_>>();

        assert_eq!(outputs[0], outputs[1], "{bin}");
    }
}
