mod common;

use common::{run_json, tiklens, world_with_sample};
use predicates::prelude::*;
use serde_json::json;
use tiklens_testing::{ExportBuilder, TestWorld};

#[test]
fn test_missing_export_suggests_config_set() {
    let world = TestWorld::new();

    tiklens(&world)
        .args(["followers", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("tiklens config set --export <PATH>"));
}

#[test]
fn test_nonexistent_export_file() {
    let world = TestWorld::new();

    tiklens(&world)
        .args(["--export", "nope.json", "followers", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export not found"));
}

#[test]
fn test_check_clean_export() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let result = run_json(&world, &["check", &export]);

    assert_eq!(result["badge"]["level"], "success");
    assert_eq!(result["content"]["followers"]["imported"], 3);
    assert_eq!(result["content"]["following"]["imported"], 3);
    assert_eq!(result["content"]["mutuals"], 2);
    assert_eq!(result["content"]["export_date"], "Jan 17, 2024");
}

#[test]
fn test_check_reports_bad_entries() {
    let world = TestWorld::new();
    let export = ExportBuilder::new()
        .follower("alice", "2024-01-15 10:30:00")
        .follower("alice", "2024-01-16 10:30:00")
        .raw_follower(json!({ "Date": "2024-01-17 10:30:00" }))
        .follower("bob", "not a date");
    let path = world.write_export("broken.json", &export).unwrap();
    let path = path.to_string_lossy();

    let result = run_json(&world, &["check", &path]);
    let followers = &result["content"]["followers"];

    assert_eq!(result["badge"]["level"], "warning");
    assert_eq!(followers["found"], 4);
    assert_eq!(followers["imported"], 1);
    assert_eq!(followers["skipped"], 1);
    assert_eq!(followers["errors"][0]["index"], 3);
    assert_eq!(followers["errors"][0]["reason"], "Missing UserName");
    assert_eq!(followers["errors"][1]["index"], 4);
}

#[test]
fn test_wrongly_typed_entry_does_not_abort_listing() {
    let world = TestWorld::new();
    let export = ExportBuilder::new()
        .follower("alice", "2024-01-15T10:30:00Z")
        .raw_follower(json!({ "UserName": 12345, "Date": "2024-01-16T10:30:00Z" }))
        .raw_follower(json!("garbage"));
    let path = world.write_export("typed.json", &export).unwrap();
    let path = path.to_string_lossy();

    let listed = run_json(&world, &["--export", &path, "followers", "list"]);
    assert_eq!(listed["content"]["pagination"]["count"], 1);

    let checked = run_json(&world, &["check", &path]);
    assert_eq!(checked["content"]["followers"]["errors"][0]["reason"], "Invalid UserName: 12345");
    assert_eq!(checked["content"]["followers"]["errors"][1]["index"], 3);
}

#[test]
fn test_history_across_exports() {
    let world = TestWorld::new();
    world
        .write_export(
            "2024-01.json",
            &ExportBuilder::new()
                .follower("alice", "2024-01-01T00:00:00Z")
                .follower("bob", "2024-01-02T00:00:00Z"),
        )
        .unwrap();
    world
        .write_export(
            "2024-02.json",
            &ExportBuilder::new()
                .follower("alice", "2024-01-01T00:00:00Z")
                .follower("carol", "2024-02-01T00:00:00Z")
                .follower("dave", "2024-02-02T00:00:00Z"),
        )
        .unwrap();
    let dir = world.exports_dir().to_string_lossy().into_owned();

    let result = run_json(&world, &["history", &dir]);
    let content = &result["content"];

    assert_eq!(content["snapshots"][0]["label"], "2024-01.json");
    assert_eq!(content["snapshots"][1]["followers"], 3);
    assert_eq!(content["periods"][0]["days_between"], 31);
    assert_eq!(content["periods"][0]["net_followers"], 1);
    assert_eq!(content["periods"][0]["followers_gained"]["names"], json!(["carol", "dave"]));
    assert_eq!(content["periods"][0]["followers_lost"]["names"], json!(["bob"]));
    assert_eq!(content["total_follower_growth"], 1);
}

#[test]
fn test_history_period_window() {
    let world = TestWorld::new();
    world
        .write_export(
            "2024-01.json",
            &ExportBuilder::new().follower("alice", "2024-01-02T00:00:00Z"),
        )
        .unwrap();
    world
        .write_export(
            "2024-02.json",
            &ExportBuilder::new().follower("bob", "2024-02-02T00:00:00Z"),
        )
        .unwrap();
    let dir = world.exports_dir().to_string_lossy().into_owned();
    let now = "2024-02-05T00:00:00Z";

    let week = run_json(&world, &["history", &dir, "--period", "week", "--now", now]);
    assert_eq!(week["content"]["period"], "week");
    assert_eq!(week["content"]["snapshots"].as_array().unwrap().len(), 1);
    assert_eq!(week["content"]["snapshots"][0]["label"], "2024-02.json");
    assert_eq!(week["badge"]["level"], "info");

    let year = run_json(&world, &["history", &dir, "--period", "year", "--now", now]);
    assert_eq!(year["content"]["periods"].as_array().unwrap().len(), 1);

    let none = run_json(
        &world,
        &["history", &dir, "--period", "week", "--now", "2025-01-01T00:00:00Z"],
    );
    assert_eq!(none["badge"]["level"], "warning");
    assert!(none["content"]["snapshots"].as_array().unwrap().is_empty());
}

#[test]
fn test_history_empty_directory() {
    let world = TestWorld::new();

    tiklens(&world)
        .arg("history")
        .arg(world.exports_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No export files"));
}
