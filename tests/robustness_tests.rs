use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_rows_are_skipped() {
    let script = common::write_actions(&[
        ("contribute", "10"),
        ("withdraw", "5"),
        ("contribute", "15"),
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("kidvest"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading action"))
        .stdout(predicate::str::contains("\"saved\": \"25\""));
}

#[test]
fn test_bad_amounts_never_fail_the_session() {
    let script = common::write_actions(&[
        ("contribute", "not_a_number"),
        ("contribute", "-20"),
        ("contribute", "0"),
        ("contribute", ""),
        ("set_goal", "abc"),
        ("contribute", "3"),
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("kidvest"));
    cmd.arg(script.path());

    // "abc" coerces the goal to 1, so the 3 is capped to 1 and completes the goal.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Goal reached!"))
        .stdout(predicate::str::contains("\"goal\": \"1\""))
        .stdout(predicate::str::contains("\"saved\": \"1\""));
}

#[test]
fn test_lowered_goal_keeps_saved_above_it() {
    let script = common::write_actions(&[("contribute", "80"), ("set_goal", "50")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("kidvest"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Goal reached!").not())
        .stdout(predicate::str::contains("\"saved\": \"80\""))
        .stdout(predicate::str::contains("\"goal\": \"50\""))
        .stdout(predicate::str::contains("\"progress_percent\": \"100\""));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("kidvest"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_exponent_and_oversized_amounts() {
    let script = common::write_actions(&[
        ("set_goal", "1e3"),
        ("contribute", "5e1"),
        ("contribute", "1e400"),
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("kidvest"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Goal reached!"))
        .stdout(predicate::str::contains("\"goal\": \"1000\""))
        .stdout(predicate::str::contains("\"saved\": \"1000\""));
}
