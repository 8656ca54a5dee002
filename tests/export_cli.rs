mod support;

use std::fs;
use std::path::Path;

use chrono::Local;
use predicates::str::contains;
use serde_json::Value;
use ticklist::export::export_file_name;

use support::TestHome;

fn add_task(home: &TestHome, text: &str) {
    support::ticklist_cmd(home)
        .args(["add", text])
        .assert()
        .success();
}

fn export_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("tasks-") && name.ends_with(".json"))
        .collect()
}

#[test]
fn export_empty_list_fails_without_a_file() {
    let home = TestHome::new();

    support::ticklist_cmd(&home)
        .args(["export"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Nothing to export"));

    assert!(export_files(home.path()).is_empty());
}

#[test]
fn export_writes_a_dated_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();
    add_task(&home, "Buy milk");
    add_task(&home, "Walk the dog");

    let before = Local::now().date_naive();
    support::ticklist_cmd(&home)
        .args(["export", "--out", "exports"])
        .assert()
        .success()
        .stdout(contains("Exported 2 tasks to"));
    let after = Local::now().date_naive();

    let files = export_files(&home.path().join("exports"));
    assert_eq!(files.len(), 1);
    // Tolerate a run that straddles midnight
    assert!(files[0] == export_file_name(before) || files[0] == export_file_name(after));

    let raw = fs::read_to_string(home.path().join("exports").join(&files[0]))?;
    let tasks: Value = serde_json::from_str(&raw)?;
    let tasks = tasks.as_array().expect("task array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["text"], "Buy milk");
    assert_eq!(tasks[0]["completed"], false);
    assert!(tasks[0]["createdAt"].is_string());

    // Pretty-printed, not a single line
    assert!(raw.lines().count() > 1);

    Ok(())
}

#[test]
fn export_json_reports_path_count_and_mime() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();
    add_task(&home, "Buy milk");

    let output = support::ticklist_cmd(&home)
        .args(["export", "--out", "exports", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;

    assert_eq!(value["command"], "export");
    assert_eq!(value["data"]["tasks"], 1);
    assert_eq!(value["data"]["mime"], "application/json");

    let path = value["data"]["path"].as_str().expect("path");
    assert!(path.ends_with(".json"));
    assert!(home.path().join(path).exists());

    Ok(())
}

#[test]
fn export_defaults_to_the_current_directory() {
    let home = TestHome::new();
    add_task(&home, "Buy milk");

    support::ticklist_cmd(&home)
        .args(["export"])
        .assert()
        .success()
        .stdout(contains("Exported 1 task to"));

    assert_eq!(export_files(home.path()).len(), 1);
}

#[test]
fn same_day_export_overwrites_the_previous_snapshot() {
    let home = TestHome::new();
    add_task(&home, "Buy milk");

    support::ticklist_cmd(&home)
        .args(["export", "--out", "exports"])
        .assert()
        .success();

    add_task(&home, "Walk the dog");
    support::ticklist_cmd(&home)
        .args(["export", "--out", "exports"])
        .assert()
        .success()
        .stdout(contains("Exported 2 tasks to"));

    assert_eq!(export_files(&home.path().join("exports")).len(), 1);
}
