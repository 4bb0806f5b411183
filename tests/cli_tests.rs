//! End-to-end tests of the command-line collaborator.

use assert_cmd::Command;
use predicates::prelude::*;

fn testbench() -> Command {
    Command::cargo_bin("testbench").expect("binary builds")
}

#[test]
fn selfcheck_suite_runs_clean() {
    testbench()
        .arg("selfcheck")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("selfcheck"))
        .stdout(predicate::str::contains("tests:    2"));
}

#[test]
fn filter_narrows_the_run() {
    testbench()
        .args(["selfcheck", "--filter", "strings"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("tests:    1"));
}

#[test]
fn unknown_suite_is_an_invalid_invocation() {
    testbench()
        .arg("no_such_suite")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown suite"));
}

#[test]
fn missing_suite_name_is_an_invalid_invocation() {
    testbench().assert().code(2);
}

#[test]
fn list_prints_registered_suites() {
    testbench()
        .arg("--list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("selfcheck"));
}
