//! Sample export generation.

use anyhow::Result;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Builds the subset of a TikTok data download that tiklens reads.
///
/// # Example
/// ```
/// use tiklens_testing::ExportBuilder;
///
/// let export = ExportBuilder::new()
///     .follower("alice", "2024-01-15T10:30:00Z")
///     .following("alice", "2024-01-20T09:00:00Z")
///     .to_json();
/// assert_eq!(export["Profile And Settings"]["Follower"]["FansList"][0]["UserName"], "alice");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ExportBuilder {
    fans: Vec<Value>,
    following: Vec<Value>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn follower(mut self, username: &str, date: &str) -> Self {
        self.fans.push(json!({ "UserName": username, "Date": date }));
        self
    }

    pub fn following(mut self, username: &str, date: &str) -> Self {
        self.following
            .push(json!({ "UserName": username, "Date": date }));
        self
    }

    /// Append an arbitrary follower entry, e.g. one with a missing field
    pub fn raw_follower(mut self, entry: Value) -> Self {
        self.fans.push(entry);
        self
    }

    /// `count` followers named `{prefix}{i}`, all on the same date
    pub fn many_followers(mut self, prefix: &str, count: usize, date: &str) -> Self {
        for i in 0..count {
            self.fans
                .push(json!({ "UserName": format!("{}{}", prefix, i), "Date": date }));
        }
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "Profile And Settings": {
                "Follower": { "FansList": self.fans },
                "Following": { "Following": self.following }
            }
        })
    }

    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(file_name);
        std::fs::write(&path, serde_json::to_string_pretty(&self.to_json())?)?;
        Ok(path)
    }
}

/// Small export with two mutuals, one follower-only and one following-only
pub fn sample_export() -> ExportBuilder {
    ExportBuilder::new()
        .follower("alice", "2024-01-15T10:30:00Z")
        .follower("bob", "2024-01-16T14:20:00Z")
        .follower("carol", "2024-01-17T09:15:00Z")
        .following("alice", "2024-01-20T08:00:00Z")
        .following("carol", "2024-01-11T12:30:00Z")
        .following("dave", "2024-01-10T08:00:00Z")
}
