use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn stt(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stt").unwrap();
    cmd.env("STT_DB", dir.join("stt.db"))
        .env("STT_CONFIG", dir.join("no-config.toml"))
        .arg("--quiet");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("stt").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("stt").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_first_run_seeds_sample_data() {
    let dir = tempdir().unwrap();
    let output = stt(dir.path())
        .args(["--json", "skill", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let skills: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(skills.as_array().unwrap().len(), 10);

    let output = stt(dir.path())
        .args(["--json", "student", "list"])
        .output()
        .unwrap();
    let students: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(students.as_array().unwrap().len(), 5);
}

#[test]
fn test_student_add_and_search() {
    let dir = tempdir().unwrap();
    stt(dir.path())
        .args([
            "student", "add", "--name", "Nina Torres", "--email", "nina@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nina Torres"));

    stt(dir.path())
        .args(["student", "search", "torres"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nina Torres"));
}

#[test]
fn test_progress_updates_status() {
    let dir = tempdir().unwrap();
    let output = stt(dir.path())
        .args(["--json", "student", "progress", "1", "2", "85"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["current_score"], Value::from(85));
    assert_eq!(record["status"], Value::from("completed"));
}

#[test]
fn test_validation_error_does_not_crash() {
    let dir = tempdir().unwrap();
    stt(dir.path())
        .args(["student", "progress", "1", "2", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_progress_for_unknown_skill_fails() {
    let dir = tempdir().unwrap();
    stt(dir.path())
        .args(["student", "progress", "1", "999", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Skill not found"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let output = stt(dir.path())
        .args(["--json", "student", "show", "999"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], Value::Bool(true));
    assert!(json["message"].as_str().unwrap().contains("999"));
}

#[test]
fn test_archive_removes_from_listing_but_keeps_rows() {
    let dir = tempdir().unwrap();
    // First run seeds five students; student 1 has progress records
    stt(dir.path())
        .args(["student", "archive", "1"])
        .assert()
        .success();

    // A fresh process loads from storage and must not see the archived student
    let output = stt(dir.path())
        .args(["--json", "student", "list"])
        .output()
        .unwrap();
    let students: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<i64> = students
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);

    // Progress rows stay in storage
    let conn = rusqlite::Connection::open(dir.path().join("stt.db")).unwrap();
    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM skill_progress WHERE student_id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(rows > 0);
}

#[test]
fn test_new_student_id_never_reuses_archived_id() {
    let dir = tempdir().unwrap();
    stt(dir.path())
        .args(["student", "archive", "5"])
        .assert()
        .success();

    let output = stt(dir.path())
        .args([
            "--json", "student", "add", "--name", "New Person", "--email", "new@example.com",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let student: Value = serde_json::from_slice(&output.stdout).unwrap();
    // Ids come from the stored max, so the archived id 5 is not handed out again
    assert_eq!(student["id"], Value::from(6));
}

#[test]
fn test_readiness_report_runs() {
    let dir = tempdir().unwrap();
    let output = stt(dir.path())
        .args(["--json", "report", "readiness", "2", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let readiness: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(readiness["readiness_percentage"].is_number());
    assert!(readiness["is_ready"].is_boolean());
}

#[test]
fn test_class_report_runs() {
    let dir = tempdir().unwrap();
    let output = stt(dir.path())
        .args(["--json", "report", "class"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total_students"], Value::from(5));
    assert_eq!(stats["top_performers"].as_array().unwrap().len(), 3);
}
