//! Shared helpers for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tiklens_testing::TestWorld;
use tiklens_testing::fixtures::sample_export;

/// A world with `exports/export.json` holding the sample export
pub fn world_with_sample() -> (TestWorld, PathBuf) {
    let world = TestWorld::new();
    let export = world
        .write_export("export.json", &sample_export())
        .expect("Failed to write export");
    (world, export)
}

#[allow(deprecated)]
pub fn tiklens(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("tiklens").expect("binary should build");
    world.configure_command(&mut cmd);
    cmd
}

/// Run with `--format json` and parse stdout
pub fn run_json(world: &TestWorld, args: &[&str]) -> Value {
    let output = tiklens(world)
        .args(["--format", "json"])
        .args(args)
        .output()
        .expect("Failed to run tiklens");

    assert!(
        output.status.success(),
        "tiklens {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

pub fn usernames(result: &Value) -> Vec<String> {
    result["content"]["cards"]
        .as_array()
        .expect("cards array")
        .iter()
        .map(|card| card["username"].as_str().unwrap_or_default().to_string())
        .collect()
}
