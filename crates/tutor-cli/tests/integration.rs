use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tutor(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tutor").unwrap();
    cmd.current_dir(dir.path()).env("TUTOR_ROOT", dir.path());
    cmd
}

fn write_snapshot(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

// ---------------------------------------------------------------------------
// tutor current
// ---------------------------------------------------------------------------

#[test]
fn current_shows_the_first_step_on_a_fresh_project() {
    let dir = TempDir::new().unwrap();
    tutor(&dir)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Home the arm"))
        .stdout(predicate::str::contains("Step 1 of 20"));
}

#[test]
fn current_json_has_step_fields() {
    let dir = TempDir::new().unwrap();
    let output = tutor(&dir).args(["current", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "home_arm");
    assert_eq!(value["total"], 20);
}

// ---------------------------------------------------------------------------
// tutor steps
// ---------------------------------------------------------------------------

#[test]
fn steps_lists_the_whole_catalog() {
    let dir = TempDir::new().unwrap();
    tutor(&dir)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("home_arm"))
        .stdout(predicate::str::contains("duplicate_action_set"))
        .stdout(predicate::str::contains("0/20 steps complete"));
}

// ---------------------------------------------------------------------------
// tutor check
// ---------------------------------------------------------------------------

#[test]
fn check_commits_a_satisfied_step_and_persists_it() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, "snap.json", r#"{ "arm_pose": { "is_homed": true } }"#);

    tutor(&dir)
        .arg("check")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed: Home the arm"))
        .stdout(predicate::str::contains("Next: Move Joint 3"));

    assert!(dir.path().join(".tutor/activity.json").exists());

    tutor(&dir)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Move Joint 3"));
}

#[test]
fn check_reports_nothing_for_an_unsatisfying_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, "snap.json", "{}");

    tutor(&dir)
        .arg("check")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("No steps completed."));
}

#[test]
fn check_chains_steps_satisfied_by_one_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        &dir,
        "snap.json",
        r#"{ "arm_pose": { "is_homed": true, "current_angles": [0.5, 0.0, 0.9] } }"#,
    );

    let output = tutor(&dir)
        .args(["check", "--json"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["completed"],
        serde_json::json!(["home_arm", "move_joint_3"])
    );
    assert_eq!(value["current"], "add_move_to_action_list");
}

#[test]
fn check_fails_on_a_missing_snapshot_file() {
    let dir = TempDir::new().unwrap();
    tutor(&dir)
        .args(["check", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read snapshot"));
}

#[test]
fn check_fails_on_a_snapshot_with_dangling_references() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        &dir,
        "snap.json",
        r#"{ "action_list": { "by_id": {}, "order": ["ghost"] } }"#,
    );
    tutor(&dir)
        .arg("check")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid snapshot"));
}

// ---------------------------------------------------------------------------
// tutor reset
// ---------------------------------------------------------------------------

#[test]
fn reset_clears_recorded_progress() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, "snap.json", r#"{ "arm_pose": { "is_homed": true } }"#);
    tutor(&dir).arg("check").arg(&snapshot).assert().success();

    tutor(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress cleared."));

    tutor(&dir)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Home the arm"));
}
