//! CLI argument handling tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("museo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("museum collection browser"))
        .stdout(predicate::str::contains("--api-base"))
        .stdout(predicate::str::contains("--log"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("museo")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
