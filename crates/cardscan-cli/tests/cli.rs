use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardscan(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cardscan").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

/// Temp dir holding a default config so the user's config is never read.
fn workspace() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();
    (dir, config)
}

#[test]
fn parse_sample_as_json() {
    let (_dir, config) = workspace();

    cardscan(&config)
        .args(["parse", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"홍길동\""))
        .stdout(predicate::str::contains("\"phone\":\"01012345678\""))
        .stdout(predicate::str::contains("\"detectedFields\""));
}

#[test]
fn parse_text_file_as_text() {
    let (dir, config) = workspace();
    let input = dir.path().join("card.txt");
    fs::write(&input, "홍길동\n주식회사 테크노바\nTel: 02-555-1234").unwrap();

    cardscan(&config)
        .arg("parse")
        .arg(&input)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:    홍길동"))
        .stdout(predicate::str::contains("Company: 주식회사 테크노바"))
        .stdout(predicate::str::contains("Landline: 025551234"));
}

#[test]
fn parse_reads_stdin() {
    let (_dir, config) = workspace();

    cardscan(&config)
        .args(["parse", "-"])
        .write_stdin("contact@example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\":\"contact@example.com\""));
}

#[test]
fn parse_writes_output_file() {
    let (dir, config) = workspace();
    let output = dir.path().join("card.csv");

    cardscan(&config)
        .args(["parse", "--sample", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("name,company,title,phone"));
    assert!(csv.contains("홍길동"));
}

#[test]
fn parse_errored_ocr_response_fails() {
    let (dir, config) = workspace();
    let input = dir.path().join("response.json");
    fs::write(
        &input,
        r#"{"OCRExitCode": 3, "IsErroredOnProcessing": true, "ErrorMessage": ["Timed out"]}"#,
    )
    .unwrap();

    cardscan(&config)
        .arg("parse")
        .arg(&input)
        .arg("--ocr-json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OCR processing error: Timed out"));
}

#[test]
fn parse_empty_file_has_zero_confidence() {
    let (dir, config) = workspace();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    cardscan(&config)
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"confidence\":0.0"))
        .stdout(predicate::str::contains("\"detectedFields\":[]"));
}

#[test]
fn parse_missing_file_fails() {
    let (dir, config) = workspace();

    cardscan(&config)
        .arg("parse")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn invalid_config_is_rejected() {
    let (dir, _config) = workspace();
    let config = dir.path().join("bad.json");
    fs::write(&config, r#"{"extraction": {"name_search_lines": 0}}"#).unwrap();

    cardscan(&config)
        .args(["parse", "--sample"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name_search_lines"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let (dir, config) = workspace();
    let cards = dir.path().join("cards");
    fs::create_dir_all(&cards).unwrap();
    fs::write(cards.join("a.txt"), "홍길동\n010-1234-5678").unwrap();
    fs::write(cards.join("b.txt"), "김철수\nkim@example.com").unwrap();
    let out = dir.path().join("out");

    cardscan(&config)
        .arg("batch")
        .arg(format!("{}/*.txt", cards.display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert!(lines.next().unwrap().starts_with("filename,status,name,company"));
    assert!(lines.next().unwrap().starts_with("a.txt,success,홍길동"));
    assert!(lines.next().unwrap().starts_with("b.txt,success,김철수"));
}

#[test]
fn batch_continue_on_error_records_failures() {
    let (dir, config) = workspace();
    let cards = dir.path().join("cards");
    fs::create_dir_all(&cards).unwrap();
    fs::write(cards.join("good.txt"), "홍길동").unwrap();
    fs::write(cards.join("bad.json"), "not json").unwrap();
    let out = dir.path().join("out");

    cardscan(&config)
        .arg("batch")
        .arg(format!("{}/*", cards.display()))
        .arg("--output-dir")
        .arg(&out)
        .args(["--summary", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"));

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("bad.json,error"));
    assert!(summary.contains("good.txt,success"));
}

#[test]
fn batch_without_matches_fails() {
    let (dir, config) = workspace();

    cardscan(&config)
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_path_is_reported() {
    let (_dir, config) = workspace();

    cardscan(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"))
        .stdout(predicate::str::contains(config.display().to_string()))
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn config_set_and_get_use_config_flag() {
    let (_dir, config) = workspace();

    cardscan(&config)
        .args(["config", "set", "extraction.name_search_lines", "4"])
        .assert()
        .success();

    let saved = fs::read_to_string(&config).unwrap();
    assert!(saved.contains("\"name_search_lines\": 4"));

    cardscan(&config)
        .args(["config", "get", "extraction.name_search_lines"])
        .assert()
        .success()
        .stdout(predicate::str::diff("4\n"));
}

#[test]
fn config_set_rejects_invalid_value() {
    let (_dir, config) = workspace();

    cardscan(&config)
        .args(["config", "set", "extraction.low_confidence_threshold", "2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("low_confidence_threshold"));

    assert_eq!(fs::read_to_string(&config).unwrap(), "{}");
}
