mod common;

use common::{run_json, tiklens, usernames, world_with_sample};
use predicates::prelude::*;
use tiklens_testing::TestWorld;

#[test]
fn test_config_show_defaults() {
    let world = TestWorld::new();

    let result = run_json(&world, &["config", "show"]);

    assert_eq!(result["content"]["page_size"], 20);
    assert_eq!(result["content"]["comparison_page_size"], 100);
    assert_eq!(result["content"]["file_exists"], false);
    assert!(result["content"]["export_path"].is_null());
    assert_eq!(
        result["suggestions"][0]["command"],
        "tiklens config set --export <PATH>"
    );
}

#[test]
fn test_config_set_is_used_by_later_commands() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let saved = run_json(
        &world,
        &["--export", &export, "config", "set", "--page-size", "2"],
    );
    assert_eq!(saved["badge"]["label"], "Configuration saved");
    assert!(world.data_dir().join("config.toml").exists());

    let listed = run_json(&world, &["followers", "list"]);
    assert_eq!(usernames(&listed), vec!["carol", "bob"]);
    assert_eq!(listed["content"]["pagination"]["total_pages"], 2);
}

#[test]
fn test_config_set_mode_changes_default_density() {
    let (world, export) = world_with_sample();

    run_json(&world, &["--mode", "minimal", "config", "set"]);

    tiklens(&world)
        .arg("--export")
        .arg(&export)
        .args(["compare", "mutuals"])
        .assert()
        .success()
        .stdout("@alice\n@carol\n");
}

#[test]
fn test_config_set_without_values_fails() {
    let world = TestWorld::new();

    tiklens(&world)
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();

    tiklens(&world)
        .assert()
        .success()
        .stdout(predicate::str::contains("tiklens config set --export <PATH>"));
}

#[test]
fn test_help_lists_commands() {
    let world = TestWorld::new();

    tiklens(&world)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("followers"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("browse"));
}
