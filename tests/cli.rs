use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_run_reports_generation() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    cmd.arg("cat")
        .arg("--size")
        .arg("10")
        .arg("--seed")
        .arg("7")
        .arg("--max-generations")
        .arg("2000")
        .assert()
        .success()
        .stdout(predicate::str::contains("cat\n"))
        .stdout(predicate::str::contains("Generation: "));
}

#[test]
fn test_quiet_prints_final_generation_only() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    let output = cmd
        .arg("ab")
        .arg("--size")
        .arg("4")
        .arg("--seed")
        .arg("1")
        .arg("--max-generations")
        .arg("2000")
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // Four candidate lines plus the summary line
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    cmd.arg("Hi")
        .arg("--seed")
        .arg("3")
        .arg("--max-generations")
        .arg("5")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"termination_reason\""))
        .stdout(predicate::str::contains("\"history\""));
}

#[test]
fn test_generation_cap_without_convergence() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    cmd.arg("a#")
        .arg("--seed")
        .arg("5")
        .arg("--max-generations")
        .arg("3")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Stopped at generation 3 without converging",
        ));
}

#[test]
fn test_empty_target_rejected() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    cmd.arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid target"));
}

#[test]
fn test_zero_size_rejected() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    cmd.arg("cat")
        .arg("--size")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_help_explains_generation_numbering() {
    let mut cmd = Command::cargo_bin("string-evo").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generation 0"));
}
