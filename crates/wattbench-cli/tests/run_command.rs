use assert_cmd::Command;
use predicates::prelude::*;

/// Selection errors must surface before any browser process is touched, so
/// these run safely on machines with no browser installed.
#[test]
fn unknown_scenario_fails_fast_with_the_known_set() {
    Command::cargo_bin("wattbench")
        .unwrap()
        .args(["run", "--browser", "chrome", "--scenario", "myspace"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown scenario 'myspace'")
                .and(predicate::str::contains("youtube")),
        );
}

#[test]
fn all_cannot_be_combined_with_named_scenarios() {
    Command::cargo_bin("wattbench")
        .unwrap()
        .args(["run", "--browser", "chrome", "--scenario", "all", "youtube"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn unknown_browser_is_rejected() {
    Command::cargo_bin("wattbench")
        .unwrap()
        .args(["run", "--browser", "safari", "--scenario", "wikipedia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("safari"));
}

#[test]
fn zero_loops_is_rejected() {
    Command::cargo_bin("wattbench")
        .unwrap()
        .args([
            "run",
            "--browser",
            "chrome",
            "--scenario",
            "wikipedia",
            "--loops",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loops"));
}

#[test]
fn run_requires_a_scenario_selection() {
    Command::cargo_bin("wattbench")
        .unwrap()
        .args(["run", "--browser", "chrome"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--scenario"));
}
