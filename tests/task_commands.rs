mod support;

use predicates::str::contains;
use serde_json::Value;

use support::TestHome;

#[test]
fn add_then_list_shows_the_task() {
    let home = TestHome::new();

    support::ticklist_cmd(&home)
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout(contains("Added task 1: \"Buy milk\""));

    support::ticklist_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Buy milk"))
        .stdout(contains("Tasks: 1 total, 0 completed, 1 pending"));
}

#[test]
fn empty_list_prints_the_placeholder() {
    let home = TestHome::new();

    support::ticklist_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No tasks yet. Add one above to get started!"));
}

#[test]
fn add_json_reports_the_task_record() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();

    let output = support::ticklist_cmd(&home)
        .args(["add", "Buy milk", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;

    assert_eq!(value["schema_version"], "ticklist.v1");
    assert_eq!(value["command"], "add");
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["id"], 1);
    assert_eq!(value["data"]["text"], "Buy milk");
    assert_eq!(value["data"]["completed"], false);
    assert!(value["data"]["createdAt"].is_string());

    Ok(())
}

#[test]
fn add_trims_surrounding_whitespace() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();

    let output = support::ticklist_cmd(&home)
        .args(["add", "  Buy milk  ", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["data"]["text"], "Buy milk");

    Ok(())
}

#[test]
fn blank_add_is_a_user_error() {
    let home = TestHome::new();

    support::ticklist_cmd(&home)
        .args(["add", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Task text is empty"));
}

#[test]
fn overlong_add_reports_the_limit() {
    let home = TestHome::new();
    let text = "x".repeat(151);

    support::ticklist_cmd(&home)
        .args(["add", &text])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("151 characters, limit is 150"));
}

#[test]
fn error_envelope_carries_code_and_kind() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();

    let output = support::ticklist_cmd(&home)
        .args(["add", "", "--json"])
        .assert()
        .failure()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;

    assert_eq!(value["schema_version"], "ticklist.v1");
    assert_eq!(value["status"], "error");
    assert_eq!(value["error"]["code"], 2);
    assert_eq!(value["error"]["kind"], "user_error");
    assert_eq!(value["error"]["message"], "Task text is empty");

    Ok(())
}

#[test]
fn done_toggles_between_states() {
    let home = TestHome::new();
    support::ticklist_cmd(&home)
        .args(["add", "Buy milk"])
        .assert()
        .success();

    support::ticklist_cmd(&home)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(contains("Task 1 completed"));

    support::ticklist_cmd(&home)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(contains("Task 1 marked incomplete"));
}

#[test]
fn done_with_unknown_id_is_a_noop() {
    let home = TestHome::new();

    support::ticklist_cmd(&home)
        .args(["done", "42"])
        .assert()
        .success()
        .stdout(contains("No task with id 42"));
}

#[test]
fn done_json_reports_the_resulting_state() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();
    support::ticklist_cmd(&home)
        .args(["add", "Buy milk"])
        .assert()
        .success();

    let output = support::ticklist_cmd(&home)
        .args(["done", "1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;

    assert_eq!(value["data"]["found"], true);
    assert_eq!(value["data"]["completed"], true);

    Ok(())
}

#[test]
fn list_json_carries_tasks_and_stats() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();
    for text in ["one", "two"] {
        support::ticklist_cmd(&home)
            .args(["add", text])
            .assert()
            .success();
    }
    support::ticklist_cmd(&home)
        .args(["done", "1"])
        .assert()
        .success();

    let output = support::ticklist_cmd(&home)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;

    let tasks = value["data"]["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["completed"], true);
    assert_eq!(tasks[1]["text"], "two");
    assert_eq!(value["data"]["stats"]["total"], 2);
    assert_eq!(value["data"]["stats"]["completed"], 1);
    assert_eq!(value["data"]["stats"]["pending"], 1);

    Ok(())
}

#[test]
fn stats_reports_counters() -> Result<(), Box<dyn std::error::Error>> {
    let home = TestHome::new();
    for text in ["one", "two", "three"] {
        support::ticklist_cmd(&home)
            .args(["add", text])
            .assert()
            .success();
    }
    support::ticklist_cmd(&home)
        .args(["done", "2"])
        .assert()
        .success();

    support::ticklist_cmd(&home)
        .args(["stats"])
        .assert()
        .success()
        .stdout(contains("Tasks: 3 total, 1 completed, 2 pending"));

    let output = support::ticklist_cmd(&home)
        .args(["stats", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["data"]["total"], 3);
    assert_eq!(value["data"]["completed"], 1);
    assert_eq!(value["data"]["pending"], 2);

    Ok(())
}

#[test]
fn quiet_suppresses_human_output() {
    let home = TestHome::new();

    support::ticklist_cmd(&home)
        .args(["add", "Buy milk", "--quiet"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}
