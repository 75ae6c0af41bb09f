use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn fitcrm(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fitcrm").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("FITCRM_HOME")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn add_client(data_dir: &Path, name: &str, goal: &str) {
    fitcrm(data_dir)
        .args(["add", "--name", name, "--age", "30", "--gender", "Female"])
        .args(["--email", "jane@example.com", "--goal", goal])
        .args(["--start-date", "2024-01-15"])
        .assert()
        .success();
}

fn first_id(data_dir: &Path) -> String {
    let raw = std::fs::read_to_string(data_dir.join("fitcrm_clients.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    records[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn add_then_list_shows_client() {
    let dir = tempfile::tempdir().unwrap();
    add_client(dir.path(), "Jane Doe", "Weight Loss");

    fitcrm(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clients (1)"))
        .stdout(predicate::str::contains("Jane Doe"));

    fitcrm(dir.path())
        .args(["ls", "--search", "JANE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));

    fitcrm(dir.path())
        .args(["ls", "--search", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients found."));
}

#[test]
fn stored_record_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    add_client(dir.path(), "Jane Doe", "Weight Loss");

    let raw = std::fs::read_to_string(dir.path().join("fitcrm_clients.json")).unwrap();
    assert!(raw.contains("\"fullName\": \"Jane Doe\""));
    assert!(raw.contains("\"lastUpdated\""));
    assert!(raw.contains("\"age\": 30"));
}

#[test]
fn invalid_age_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    fitcrm(dir.path())
        .args(["add", "--name", "Jane", "--age", "abc", "--gender", "Female"])
        .args(["--email", "jane@example.com", "--goal", "Weight Loss"])
        .args(["--start-date", "2024-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid age"));

    assert!(!dir.path().join("fitcrm_clients.json").exists());
}

#[test]
fn missing_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    fitcrm(dir.path())
        .args(["add", "--name", "Jane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required fields"));
}

#[test]
fn offline_view_shows_goal_fallback() {
    let dir = tempfile::tempdir().unwrap();
    add_client(dir.path(), "Jane Doe", "Muscle Gain");
    let id = first_id(dir.path());

    fitcrm(dir.path())
        .args(["view", &id, "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("Loading exercises from Wger API..."))
        .stdout(predicate::str::contains("Barbell Squats"))
        .stdout(predicate::str::contains("built-in Muscle Gain exercises"));
}

#[test]
fn view_unknown_client() {
    let dir = tempfile::tempdir().unwrap();

    fitcrm(dir.path())
        .args(["view", "nope", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client not found."));
}

#[test]
fn edit_updates_only_given_fields() {
    let dir = tempfile::tempdir().unwrap();
    add_client(dir.path(), "Jane Doe", "Weight Loss");
    let id = first_id(dir.path());

    fitcrm(dir.path())
        .args(["edit", &id, "--name", "Jane Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client updated: Jane Smith"));

    let raw = std::fs::read_to_string(dir.path().join("fitcrm_clients.json")).unwrap();
    assert!(raw.contains("Jane Smith"));
    assert!(raw.contains("Weight Loss"));
    assert_eq!(first_id(dir.path()), id);
}

#[test]
fn edit_unknown_client_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    fitcrm(dir.path())
        .args(["edit", "missing-id", "--name", "Ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client not found: missing-id"));

    assert!(!dir.path().join("fitcrm_clients.json").exists());
}

#[test]
fn delete_with_yes_removes_client() {
    let dir = tempfile::tempdir().unwrap();
    add_client(dir.path(), "Jane Doe", "Weight Loss");
    add_client(dir.path(), "Bob Stone", "Flexibility");
    let id = first_id(dir.path());

    fitcrm(dir.path())
        .args(["rm", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client deleted: Jane Doe"))
        .stdout(predicate::str::contains("Clients (1)"));
}

#[test]
fn declined_delete_keeps_client() {
    let dir = tempfile::tempdir().unwrap();
    add_client(dir.path(), "Jane Doe", "Weight Loss");
    let id = first_id(dir.path());

    fitcrm(dir.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to delete Jane Doe?"))
        .stdout(predicate::str::contains("Deletion cancelled."))
        .stdout(predicate::str::contains("Clients (1)"));
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();

    fitcrm(dir.path())
        .args(["config", "relay", "corsproxy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved relay = corsproxy"));

    fitcrm(dir.path())
        .args(["config", "relay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corsproxy"));

    fitcrm(dir.path())
        .args(["config", "limit", "many"])
        .assert()
        .failure();
}

#[test]
fn corrupt_roster_lists_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fitcrm_clients.json"), "{ not json").unwrap();

    fitcrm(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Clients (0)"))
        .stdout(predicate::str::contains("No clients found."));
}

#[test]
fn add_over_corrupt_roster_keeps_a_backup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fitcrm_clients.json"), "{ not json").unwrap();

    add_client(dir.path(), "Jane Doe", "Weight Loss");

    let backups: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with(".fitcrm_clients.corrupt-"))
        .collect();
    assert_eq!(backups.len(), 1);
    let kept = std::fs::read_to_string(dir.path().join(&backups[0])).unwrap();
    assert_eq!(kept, "{ not json");
}

#[test]
fn init_creates_roster() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("nested");

    fitcrm(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized fitcrm roster"));

    assert!(data.join("fitcrm_clients.json").exists());
}
