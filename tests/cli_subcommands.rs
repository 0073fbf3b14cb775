use predicates::str::diff;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

fn write_temp_snapshot(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should be available")
        .as_nanos();
    path.push(format!("sim-dash-{}.{}", nanos, extension));
    fs::write(&path, contents).expect("snapshot write should succeed");
    path
}

#[test]
fn list_views_prints_supported_values() {
    let expected = concat!(
        "page\n",
        "scenarios\n",
        "controls\n",
        "monitor\n",
        "log\n",
        "results\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sim-dash");
    cmd.arg("list-views");
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn show_state_prints_parsed_snapshot() {
    let snapshot = r#"
[simulation]
paused = true
speed = 0.5

[[simulation.scenarios]]
id = "db-breach"
name = "Database Breach"
difficulty = "medium"
attack_type = "sql_injection"
steps = ["recon", "probe", "inject", "extract"]

[simulation.active]
scenario_name = "Database Breach"
current_step = 2
steps = ["recon", "probe", "inject", "extract"]
attack_type = "sql_injection"

[[simulation.active.events]]
id = "a1"
event_type = "attack"
description = "probe"
timestamp = 10

[[security.events]]
id = "s1"
event_type = "scan"
description = "sweep"
timestamp = 5
"#;
    let path = write_temp_snapshot(snapshot, "toml");

    let expected = concat!(
        "Page state: active\n",
        "Paused: true\n",
        "Speed: 0.5x\n",
        "Scenarios:\n",
        "- Database Breach [medium] (sql_injection, 4 steps)\n",
        "Active: Database Breach (step 2 of 4, 1 events)\n",
        "Results: none\n",
        "Security events: 1\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sim-dash");
    cmd.args(["show-state", "--state", path.to_str().unwrap()]);
    cmd.assert().success().stdout(diff(expected));
    fs::remove_file(path).ok();
}

#[test]
fn show_state_reports_results_counts() {
    let snapshot = r#"
[simulation]
paused = false
speed = 1.0

[simulation.report]
blocked_attacks = 8
detected_attacks = 1
successful_attacks = 1
total_attacks = 10
"#;
    let path = write_temp_snapshot(snapshot, "toml");

    let expected = concat!(
        "Page state: completed\n",
        "Paused: false\n",
        "Speed: 1x\n",
        "Scenarios: none\n",
        "Active: none\n",
        "Results: 10 attacks (8 blocked, 1 detected, 1 successful)\n",
        "Security events: 0\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sim-dash");
    cmd.args(["show-state", "--state", path.to_str().unwrap()]);
    cmd.assert().success().stdout(diff(expected));
    fs::remove_file(path).ok();
}
