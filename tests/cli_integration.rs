use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn rollbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rollbook").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn add_amy(data_dir: &Path) {
    rollbook(data_dir)
        .args([
            "add",
            "--name",
            "Amy Bee",
            "--id",
            "A1234567X",
            "--email",
            "amy@u.nus.edu",
            "--module",
            "CS2103T",
            "--tag",
            "year2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student A1234567X"));
}

#[test]
fn add_then_list_shows_the_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    rollbook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("A1234567X"))
        .stdout(predicate::str::contains("Amy Bee"))
        .stdout(predicate::str::contains("CS2103T"));
}

#[test]
fn duplicate_add_fails_and_keeps_one_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    rollbook(temp_dir.path())
        .args([
            "add",
            "--name",
            "Amy Clone",
            "--id",
            "a1234567x",
            "--email",
            "clone@u.nus.edu",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    rollbook(temp_dir.path())
        .arg("find")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record listed"));
}

#[test]
fn malformed_student_id_is_rejected_with_constraint() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .args([
            "add",
            "--name",
            "Amy Bee",
            "--id",
            "12345",
            "--email",
            "amy@u.nus.edu",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student IDs should be"));

    rollbook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn find_matches_name_substring_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());
    rollbook(temp_dir.path())
        .args([
            "add",
            "--name",
            "Bob Choo",
            "--id",
            "A7654321Y",
            "--email",
            "bob@u.nus.edu",
        ])
        .assert()
        .success();

    rollbook(temp_dir.path())
        .args(["find", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Choo"))
        .stdout(predicate::str::contains("Amy Bee").not())
        .stdout(predicate::str::contains("1 record listed"));
}

#[test]
fn filter_requires_every_tag() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());
    rollbook(temp_dir.path())
        .args([
            "add",
            "--name",
            "Bob Choo",
            "--id",
            "A7654321Y",
            "--email",
            "bob@u.nus.edu",
            "--tag",
            "year2",
            "--tag",
            "exchange",
        ])
        .assert()
        .success();

    rollbook(temp_dir.path())
        .args(["filter", "year2", "exchange"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Choo"))
        .stdout(predicate::str::contains("Amy Bee").not());
}

#[test]
fn attendance_and_grades_show_in_view() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    rollbook(temp_dir.path())
        .args(["attendance", "A1234567X", "2025-01-15", "present"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked A1234567X present"));

    rollbook(temp_dir.path())
        .args(["grade", "A1234567X", "Midterm", "85"])
        .assert()
        .success();

    rollbook(temp_dir.path())
        .args(["view", "A1234567X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attendance: 1/1 present"))
        .stdout(predicate::str::contains("Midterm  85"));
}

#[test]
fn delete_of_missing_identity_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    rollbook(temp_dir.path())
        .args(["delete", "A0000000Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    rollbook(temp_dir.path())
        .args(["delete", "A1234567X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted student A1234567X"));

    rollbook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn records_persist_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());
    rollbook(temp_dir.path())
        .args(["remark", "A1234567X", "asks good questions"])
        .assert()
        .success();

    rollbook(temp_dir.path())
        .args(["view", "A1234567X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remark: asks good questions"));
}

#[test]
fn config_sets_and_reads_theme() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme: dark"));

    rollbook(temp_dir.path())
        .args(["config", "theme", "light"])
        .assert()
        .success();

    rollbook(temp_dir.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme: light"));
}
