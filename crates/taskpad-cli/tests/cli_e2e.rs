#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taskpad_cmd(db: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("taskpad"));
    cmd.env("TASKPAD_DB", db.as_os_str());
    cmd
}

#[test]
fn test_full_task_lifecycle() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    // 1. Add a task
    taskpad_cmd(&db)
        .args(["add", "Buy milk", "2%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 added"));

    // 2. It lists as pending
    taskpad_cmd(&db)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Pending"));

    // 3. Toggle it complete
    taskpad_cmd(&db)
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));

    // 4. Update title and description
    taskpad_cmd(&db)
        .args(["update", "1", "Buy milk", "Whole"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    taskpad_cmd(&db)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Whole"))
        // update must not touch the completion flag
        .stdout(predicate::str::contains("Completed"));

    // 5. Delete, then show fails
    taskpad_cmd(&db)
        .args(["delete", "1"])
        .assert()
        .success();

    taskpad_cmd(&db)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found"));
}

#[test]
fn test_add_empty_title_fails_without_side_effects() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));

    taskpad_cmd(&db)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_list_empty_store() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_add_trims_title() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db)
        .args(["add", "  Call the bank  "])
        .assert()
        .success();

    taskpad_cmd(&db)
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Call the bank\""));
}

#[test]
fn test_json_listing() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db)
        .args(["add", "Buy milk", "2%"])
        .assert()
        .success();

    taskpad_cmd(&db)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Buy milk\""))
        .stdout(predicate::str::contains("\"completed\": false"));
}

#[test]
fn test_ids_survive_deletion() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db).args(["add", "A"]).assert().success();
    taskpad_cmd(&db).args(["add", "B"]).assert().success();
    taskpad_cmd(&db).args(["delete", "2"]).assert().success();

    // The freed id is not handed out again
    taskpad_cmd(&db)
        .args(["add", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 3 added"));
}

#[test]
fn test_operations_on_unknown_id_fail() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    for args in [
        vec!["show", "99"],
        vec!["update", "99", "title"],
        vec!["delete", "99"],
        vec!["toggle", "99"],
    ] {
        taskpad_cmd(&db)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Task not found: 99"));
    }
}

#[test]
fn test_chat_session_roundtrip() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db)
        .args(["chat", "--ephemeral"])
        .write_stdin("add task buy groceries\nlist tasks\ncomplete task 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 1"))
        .stdout(predicate::str::contains("buy groceries"))
        .stdout(predicate::str::contains("Task 1 completed"));
}

#[test]
fn test_chat_unknown_input_suggests() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tasks.db");

    taskpad_cmd(&db)
        .args(["chat", "--ephemeral"])
        .write_stdin("what's the weather\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I didn't catch that"));
}
