#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli(planning: &Path) -> Command {
    let mut cmd = Command::cargo_bin("brigade-cli").unwrap();
    cmd.arg("--planning").arg(planning);
    cmd
}

#[test]
fn add_shift_then_validate_reports_opening_error() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");

    cli(&planning)
        .args(["add-shift", "--id", "1", "--day", "0", "--start", "08:00", "--end", "16:00"])
        .args(["--status", "confirmed", "--employees", "1"])
        .assert()
        .success();
    assert!(planning.exists());

    cli(&planning)
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("opening"));
}

#[test]
fn coverage_of_empty_planning_is_incomplete() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    let report = dir.path().join("coverage.csv");

    cli(&planning)
        .args(["coverage", "--day", "4", "--report"])
        .arg(&report)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Aucun créneau n'est couvert ce jour"));

    let csv = fs::read_to_string(&report).unwrap();
    assert!(csv.starts_with("day,name,percentage"));
    assert!(csv.contains("vendredi"));
}

#[test]
fn imported_night_shift_covers_next_morning() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");
    let shifts = dir.path().join("shifts.csv");
    fs::write(
        &shifts,
        "id,day,start,end,status,employees\n1,6,22:00,03:00,confirmed,2;3\n",
    )
    .unwrap();

    cli(&planning)
        .args(["import", "--csv"])
        .arg(&shifts)
        .assert()
        .success();

    cli(&planning)
        .args(["slot", "--day", "0", "--time", "02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("couvert"));

    cli(&planning)
        .args(["slot", "--day", "0", "--time", "04:00"])
        .assert()
        .code(2);

    cli(&planning)
        .args(["staff", "--day", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lundi: 2"));
}

#[test]
fn invalid_time_is_rejected() {
    let dir = tempdir().unwrap();
    let planning = dir.path().join("planning.json");

    cli(&planning)
        .args(["add-shift", "--id", "1", "--day", "0", "--start", "25:00", "--end", "02:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time format"));
    assert!(!planning.exists());
}
