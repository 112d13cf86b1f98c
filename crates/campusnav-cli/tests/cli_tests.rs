//! Integration tests for the `campusnav` binary.

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixtures present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("CAMPUSNAV_MAP_PATH")
        .env_remove("CAMPUSNAV_SCHEDULE_PATH")
        .arg("--map")
        .arg(fixtures_dir().join("campus_map.json"))
        .arg("--schedule")
        .arg(fixtures_dir().join("schedule.json"));
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command runs");
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn route_prints_path_and_directions() {
    cli()
        .args(["route", "--from", "Reception", "--to", "Room 318A", "--at", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Reception -> Room 318A (6 hops, mode: normal)",
        ))
        .stdout(predicate::str::contains("Take the stairs UP to floor 2"))
        .stdout(predicate::str::contains("You have arrived at room Room 318A"));
}

#[test]
fn wheelchair_route_as_json_uses_the_elevator() {
    let value = stdout_json(cli().args([
        "--format",
        "json",
        "route",
        "--from",
        "Reception",
        "--to",
        "Room 318A",
        "--mode",
        "wheelchair",
        "--at",
        "10:00",
    ]));

    assert_eq!(value["mode"], "wheelchair");
    let names: Vec<&str> = value["steps"]
        .as_array()
        .expect("steps array")
        .iter()
        .filter_map(|step| step["name"].as_str())
        .collect();
    assert!(names.contains(&"Elevator G"));
    assert!(!names.iter().any(|name| name.starts_with("Stairs")));
    let seconds = value["total_time_seconds"].as_f64().unwrap();
    assert!((seconds - 193.159).abs() < 1e-2);
}

#[test]
fn energy_saver_is_an_alias_for_stairs_mode() {
    for label in ["energySaver", "energy-saver", "stairs"] {
        let value = stdout_json(cli().args([
            "--format", "json", "route", "--from", "Room 101", "--to", "Cafeteria", "--mode", label,
        ]));
        assert_eq!(value["mode"], "stairs", "{label}");
    }
}

#[test]
fn lunch_break_slows_the_elevator() {
    let morning = stdout_json(cli().args([
        "--format", "json", "route", "--from", "Reception", "--to", "Room 318A", "--mode",
        "wheelchair", "--at", "10:00",
    ]));
    let lunch = stdout_json(cli().args([
        "--format", "json", "route", "--from", "Reception", "--to", "Room 318A", "--mode",
        "wheelchair", "--at", "13:30",
    ]));
    let delta = lunch["total_time_seconds"].as_f64().unwrap()
        - morning["total_time_seconds"].as_f64().unwrap();
    assert!((delta - 60.0).abs() < 1e-6);
}

#[test]
fn rich_format_renders_markdown() {
    cli()
        .args(["--format", "rich", "route", "--from", "Room 101", "--to", "Cafeteria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Route**"))
        .stdout(predicate::str::contains("**Cafeteria** (department, floor 0)"));
}

#[test]
fn enhanced_format_tags_transit() {
    cli()
        .args([
            "--format",
            "enhanced",
            "route",
            "--from",
            "Reception",
            "--to",
            "Computer Science",
            "--at",
            "09:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(" STRT  Reception"))
        .stdout(predicate::str::contains(" LIFT  Elevator 2"))
        .stdout(predicate::str::contains(" GOAL  Computer Science"));
}

#[test]
fn unknown_node_error_is_friendly() {
    cli()
        .args(["route", "--from", "Recepton", "--to", "Cafeteria"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node: Recepton"))
        .stderr(predicate::str::contains("Did you mean 'Reception'?"));
}

#[test]
fn unreachable_node_reports_route_not_found() {
    cli()
        .args(["route", "--from", "Reception", "--to", "Storage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no route found between Reception and Storage",
        ));
}

#[test]
fn malformed_time_is_rejected_by_the_parser() {
    cli()
        .args(["route", "--from", "Reception", "--to", "Cafeteria", "--at", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected HH:MM"));
}

#[test]
fn missing_map_is_reported_with_its_path() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nope.json");
    cargo_bin_cmd!("campusnav")
        .env("NO_COLOR", "1")
        .arg("--map")
        .arg(&missing)
        .args(["nodes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load campus map"))
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn map_path_can_come_from_the_environment() {
    cargo_bin_cmd!("campusnav")
        .env("NO_COLOR", "1")
        .env("CAMPUSNAV_MAP_PATH", fixtures_dir().join("campus_map.json"))
        .args(["nodes", "--category", "department"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Computer Science"))
        .stdout(predicate::str::contains("Reception"))
        .stdout(predicate::str::contains("Lab 1A").not());
}

#[test]
fn nodes_can_be_filtered_by_floor_and_category() {
    cli()
        .args(["nodes", "--floor", "2", "--category", "room"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Room 318A"))
        .stdout(predicate::str::contains("Room 101").not());
}

#[test]
fn nodes_json_lists_every_node_sorted() {
    let value = stdout_json(cli().args(["--format", "json", "nodes"]));
    let nodes = value.as_array().expect("array");
    assert_eq!(nodes.len(), 22);
    assert_eq!(nodes[0]["name"], "C0-1");
    assert_eq!(nodes[0]["type"], "corridor");
    let names: Vec<&str> = nodes.iter().filter_map(|n| n["name"].as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn schedule_status_reports_occupancy() {
    cli()
        .args(["schedule", "status", "318A", "--day", "monday", "--at", "09:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("318A: Occupied"))
        .stdout(predicate::str::contains("Data Structures"))
        .stdout(predicate::str::contains("09:00 - 10:30"));
}

#[test]
fn schedule_status_json_for_a_free_room() {
    let value = stdout_json(cli().args([
        "--format", "json", "schedule", "status", "318A", "--day", "Mon", "--at", "10:45",
    ]));
    assert_eq!(value["room"], "318A");
    assert_eq!(value["day"], "Monday");
    assert_eq!(value["time"], "10:45");
    assert_eq!(value["status"], "Available");
    assert!(value["details"].is_null());
}

#[test]
fn schedule_search_lists_matches() {
    cli()
        .args(["schedule", "search", "lab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Digital Logic Lab (Lab)"));

    cli()
        .args(["schedule", "search", "astronomy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions match 'astronomy'"));
}
