use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_conference-scheduler");
const TALKS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/talks.txt");
const EXPECTED_SCHEDULE: &str = include_str!("fixtures/expected_schedule.txt");

#[test]
fn test_cli_prints_schedule() {
    let output = Command::new(BIN).arg(TALKS).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_SCHEDULE);
}

#[test]
fn test_cli_requires_input_argument() {
    let output = Command::new(BIN).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_missing_file_is_fatal() {
    let output = Command::new(BIN)
        .arg("/nonexistent/talks.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load talks"));
}

#[test]
fn test_cli_no_valid_talks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talks.txt");
    std::fs::write(&path, "\nnot a talk\n60min\n").unwrap();

    let output = Command::new(BIN).arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "No talks to schedule.\n"
    );
}

#[test]
fn test_cli_json_output() {
    let output = Command::new(BIN)
        .args([TALKS, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["conference"]["tracks"].as_array().unwrap().len(), 4);
    assert_eq!(report["summary"]["talk_count"], 19);
    assert!(report["rejected"].as_array().unwrap().is_empty());
}

#[test]
fn test_cli_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("scheduler.toml");
    std::fs::write(&config, "[timetable]\nmorning_start = \"08:00:00\"\n").unwrap();

    let output = Command::new(BIN)
        .arg(TALKS)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Track 1:\n08:00AM "));
}

#[test]
fn test_cli_invalid_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("scheduler.toml");
    std::fs::write(&config, "[limits]\nafternoon_min_minutes = 500\n").unwrap();

    let output = Command::new(BIN)
        .arg(TALKS)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
