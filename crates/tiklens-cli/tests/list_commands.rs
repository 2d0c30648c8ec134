mod common;

use common::{run_json, tiklens, usernames, world_with_sample};
use predicates::prelude::*;

#[test]
fn test_followers_list_newest_first() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let result = run_json(&world, &["--export", &export, "followers", "list"]);

    assert_eq!(usernames(&result), vec!["carol", "bob", "alice"]);
    assert_eq!(result["content"]["kind"], "followers");
    assert_eq!(result["content"]["pagination"]["count"], 3);

    let alice = &result["content"]["cards"][2];
    assert_eq!(alice["avatar_glyph"], "A");
    assert_eq!(alice["handle_label"], "@alice");
    assert_eq!(alice["mutual_badge"]["label"], "Mutual");
    assert_eq!(alice["date_lines"][0], "Followed: Jan 15, 2024");

    let bob = &result["content"]["cards"][1];
    assert!(bob.get("mutual_badge").is_none());
}

#[test]
fn test_following_list_uses_following_since() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let result = run_json(&world, &["--export", &export, "following", "list"]);

    assert_eq!(usernames(&result), vec!["alice", "carol", "dave"]);
    assert_eq!(
        result["content"]["cards"][2]["date_lines"][0],
        "Following since: Jan 10, 2024"
    );
}

#[test]
fn test_followers_search_and_date_range() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let searched = run_json(
        &world,
        &["--export", &export, "followers", "list", "--search", "AL"],
    );
    assert_eq!(usernames(&searched), vec!["alice"]);

    let since = run_json(
        &world,
        &["--export", &export, "followers", "list", "--since", "2024-01-16"],
    );
    assert_eq!(usernames(&since), vec!["carol", "bob"]);

    let until = run_json(
        &world,
        &["--export", &export, "followers", "list", "--until", "2024-01-16"],
    );
    assert_eq!(usernames(&until), vec!["bob", "alice"]);
}

#[test]
fn test_followers_order_and_pagination() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let result = run_json(
        &world,
        &[
            "--export", &export, "followers", "list", "--order", "username", "--page-size", "2",
        ],
    );

    assert_eq!(usernames(&result), vec!["alice", "bob"]);
    assert_eq!(result["content"]["pagination"]["total_pages"], 2);
    assert_eq!(result["content"]["pagination"]["has_next"], true);
    assert_eq!(
        result["suggestions"][0]["command"],
        "tiklens followers list --page 2"
    );

    let second = run_json(
        &world,
        &[
            "--export", &export, "followers", "list", "--order", "-username", "--page", "2",
            "--page-size", "2",
        ],
    );
    assert_eq!(usernames(&second), vec!["alice"]);
}

#[test]
fn test_page_past_end_is_empty() {
    let (world, export) = world_with_sample();
    let export = export.to_string_lossy();

    let result = run_json(
        &world,
        &["--export", &export, "followers", "list", "--page", "7"],
    );

    assert!(usernames(&result).is_empty());
    assert_eq!(result["content"]["pagination"]["count"], 3);
    assert_eq!(result["badge"]["level"], "warning");
}

#[test]
fn test_invalid_since_is_reported() {
    let (world, export) = world_with_sample();

    tiklens(&world)
        .arg("--export")
        .arg(&export)
        .args(["followers", "list", "--since", "last tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --since value"));
}

#[test]
fn test_plain_standard_output() {
    let (world, export) = world_with_sample();

    tiklens(&world)
        .arg("--export")
        .arg(&export)
        .args(["--mode", "standard", "followers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Followers · 3 followers"))
        .stdout(predicate::str::contains("[A] @alice  👥 Mutual\n    Followed: Jan 15, 2024"))
        .stdout(predicate::str::contains("[B] @bob\n    Followed: Jan 16, 2024"));
}

#[test]
fn test_minimal_output_is_handles() {
    let (world, export) = world_with_sample();

    tiklens(&world)
        .arg("--export")
        .arg(&export)
        .args(["--mode", "minimal", "following", "list"])
        .assert()
        .success()
        .stdout("@alice\n@carol\n@dave\n");
}
