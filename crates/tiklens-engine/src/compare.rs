use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use tiklens_types::{ComparisonRecord, FollowerRecord, FollowingRecord};

/// Which slice of the follower/following overlap to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonKind {
    /// Follow each other
    Mutuals,
    /// Follow the owner, not followed back
    FollowersOnly,
    /// Followed by the owner, not following back
    FollowingOnly,
}

impl ComparisonKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonKind::Mutuals => "mutuals",
            ComparisonKind::FollowersOnly => "followers only",
            ComparisonKind::FollowingOnly => "following only",
        }
    }
}

/// Compare the two lists by username.
///
/// Results are newest first (for mutuals, by the later of the two dates);
/// equal dates fall back to username order.
pub fn compare(
    followers: &[FollowerRecord],
    following: &[FollowingRecord],
    kind: ComparisonKind,
) -> Vec<ComparisonRecord> {
    let followed_on: HashMap<&str, DateTime<Utc>> = followers
        .iter()
        .map(|f| (f.username.as_str(), f.date_followed))
        .collect();
    let following_since: HashMap<&str, DateTime<Utc>> = following
        .iter()
        .map(|f| (f.username.as_str(), f.date_followed))
        .collect();

    let mut records: Vec<ComparisonRecord> = match kind {
        ComparisonKind::Mutuals => followed_on
            .iter()
            .filter_map(|(name, followed)| {
                following_since.get(name).map(|since| ComparisonRecord {
                    username: (*name).to_string(),
                    date_followed: Some(*followed),
                    date_following: Some(*since),
                    is_mutual: true,
                })
            })
            .collect(),
        ComparisonKind::FollowersOnly => followed_on
            .iter()
            .filter(|(name, _)| !following_since.contains_key(*name))
            .map(|(name, followed)| ComparisonRecord {
                username: (*name).to_string(),
                date_followed: Some(*followed),
                date_following: None,
                is_mutual: false,
            })
            .collect(),
        ComparisonKind::FollowingOnly => following_since
            .iter()
            .filter(|(name, _)| !followed_on.contains_key(*name))
            .map(|(name, since)| ComparisonRecord {
                username: (*name).to_string(),
                date_followed: None,
                date_following: Some(*since),
                is_mutual: false,
            })
            .collect(),
    };

    records.sort_by(|a, b| {
        Reverse(a.latest_date())
            .cmp(&Reverse(b.latest_date()))
            .then_with(|| a.username.cmp(&b.username))
    });
    records
}
