//! End-to-end CLI tests for chatstat.
//!
//! These tests run the actual binary against transcripts written to a temp
//! directory and check the JSON report and exit codes.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
1/2/24, 6:30 AM - Alice: good morning 🌞
1/2/24, 6:35 AM - Bob: morning! see https://example.com
1/2/24, 9:00 AM - Alice: <Media omitted>
1/2/24, 9:10 AM - Bob added Carol
3/3/24, 7:45 PM - Carol: hi everyone, thanks for adding me";

const US_CHAT: &str = "\
12/25/23, 7:00 PM - Alice: merry christmas
12/25/23, 7:02 PM - Bob: you too";

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("us_chat.txt"), US_CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"conversation_gap_minutes": 600, "top_words": 2}"#,
    )
    .unwrap();
    fs::write(dir.path().join("stop.txt"), "morning\ngood\n").unwrap();
    dir
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn chatstat() -> Command {
    Command::cargo_bin("chatstat").unwrap()
}

fn report(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_overall_report() {
    let dir = setup_fixtures();
    let json = report(chatstat().arg(fixture(&dir, "chat.txt")));

    assert_eq!(json["selected"], "Overall");
    assert_eq!(json["stats"]["messages"], 5);
    assert_eq!(json["stats"]["media"], 1);
    assert_eq!(json["stats"]["links"], 1);
    assert_eq!(json["senders"][0], "Overall");
    assert_eq!(json["early_morning_starter"]["key"], "Alice");
    assert_eq!(json["sentiment"].as_object().unwrap().len(), 3);
}

#[test]
fn test_user_filter() {
    let dir = setup_fixtures();
    let json = report(
        chatstat()
            .arg(fixture(&dir, "chat.txt"))
            .args(["--user", "Bob"]),
    );
    assert_eq!(json["selected"], "Bob");
    assert_eq!(json["stats"]["messages"], 1);
    assert_eq!(json["busy_users"]["shares"][0]["percent"], 20.0);
}

#[test]
fn test_date_filter() {
    let dir = setup_fixtures();
    let json = report(
        chatstat()
            .arg(fixture(&dir, "chat.txt"))
            .args(["--after", "2024-03-01"]),
    );
    assert_eq!(json["stats"]["messages"], 1);
    assert_eq!(json["after"], "2024-03-01");
}

#[test]
fn test_month_first() {
    let dir = setup_fixtures();
    let json = report(
        chatstat()
            .arg(fixture(&dir, "us_chat.txt"))
            .arg("--month-first"),
    );
    assert_eq!(json["monthly_timeline"][0]["label"], "December-2023");
}

#[test]
fn test_config_file() {
    let dir = setup_fixtures();
    let json = report(
        chatstat()
            .arg(fixture(&dir, "chat.txt"))
            .arg("--config")
            .arg(fixture(&dir, "config.json")),
    );
    // A ten-hour gap merges the February morning into one conversation
    let starters = json["conversation_starters"].as_array().unwrap();
    assert_eq!(starters[0]["key"], "Alice");
    assert_eq!(starters[0]["count"], 1);
    assert!(json["common_words"].as_array().unwrap().len() <= 2);
}

#[test]
fn test_custom_stopwords() {
    let dir = setup_fixtures();
    let json = report(
        chatstat()
            .arg(fixture(&dir, "chat.txt"))
            .arg("--stopwords")
            .arg(fixture(&dir, "stop.txt")),
    );
    let words: Vec<&str> = json["common_words"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["key"].as_str())
        .collect();
    assert!(!words.contains(&"morning"));
    assert!(words.contains(&"everyone"));
}

#[test]
fn test_pretty_output() {
    let dir = setup_fixtures();
    chatstat()
        .arg(fixture(&dir, "chat.txt"))
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"selected\": \"Overall\""));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_input() {
    chatstat()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_empty_transcript() {
    let dir = setup_fixtures();
    chatstat()
        .arg(fixture(&dir, "empty.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no message headers"));
}

#[test]
fn test_day_first_rejects_us_dates() {
    let dir = setup_fixtures();
    chatstat()
        .arg(fixture(&dir, "us_chat.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp"));
}

#[test]
fn test_bad_date_argument() {
    let dir = setup_fixtures();
    chatstat()
        .arg(fixture(&dir, "chat.txt"))
        .args(["--before", "March 3rd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_missing_stopword_file() {
    let dir = setup_fixtures();
    chatstat()
        .arg(fixture(&dir, "chat.txt"))
        .args(["--stopwords", "/no/such/stopwords.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stopword list"));
}

#[test]
fn test_help() {
    chatstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--month-first"));
}
