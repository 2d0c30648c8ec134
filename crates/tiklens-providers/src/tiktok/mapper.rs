use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use tiklens_types::{FollowerRecord, FollowingRecord, RelationshipKind, parse_timestamp};

use serde_json::Value;

use super::schema::TikTokExport;

/// Records extracted from one export, plus what happened to each entry
#[derive(Debug, Clone)]
pub struct ImportedRelationships {
    pub followers: Vec<FollowerRecord>,
    pub following: Vec<FollowingRecord>,
    pub report: ImportReport,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportReport {
    pub followers: SectionReport,
    pub following: SectionReport,
}

impl ImportReport {
    pub fn error_count(&self) -> usize {
        self.followers.errors.len() + self.following.errors.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SectionReport {
    /// Entries present in the export
    pub found: usize,
    pub imported: usize,
    /// Duplicate usernames after the first occurrence
    pub skipped: usize,
    pub errors: Vec<EntryError>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryError {
    /// 1-based position in the export list
    pub index: usize,
    pub reason: String,
}

struct ValidEntry {
    username: String,
    date: DateTime<Utc>,
}

pub(crate) fn map_export(export: &TikTokExport, imported_at: DateTime<Utc>) -> ImportedRelationships {
    let (fans, follower_report) = map_section(export.fans(), RelationshipKind::Follower);
    let (followings, following_report) =
        map_section(export.followings(), RelationshipKind::Following);

    let fan_names: HashSet<&str> = fans.iter().map(|e| e.username.as_str()).collect();
    let following_names: HashSet<&str> = followings.iter().map(|e| e.username.as_str()).collect();

    let followers = fans
        .iter()
        .map(|e| {
            FollowerRecord::new(e.username.clone(), e.date, imported_at)
                .with_mutual(following_names.contains(e.username.as_str()))
        })
        .collect();

    let following = followings
        .iter()
        .map(|e| {
            FollowingRecord::new(e.username.clone(), e.date, imported_at)
                .with_mutual(fan_names.contains(e.username.as_str()))
        })
        .collect();

    ImportedRelationships {
        followers,
        following,
        report: ImportReport {
            followers: follower_report,
            following: following_report,
        },
    }
}

fn map_section(entries: &[Value], kind: RelationshipKind) -> (Vec<ValidEntry>, SectionReport) {
    let mut report = SectionReport {
        found: entries.len(),
        ..SectionReport::default()
    };
    let mut seen: HashSet<String> = HashSet::new();
    let mut valid = Vec::with_capacity(entries.len());

    for (i, raw) in entries.iter().enumerate() {
        let index = i + 1;
        match validate_entry(raw) {
            Ok(entry) => {
                if !seen.insert(entry.username.clone()) {
                    tracing::debug!(%kind, index, username = %entry.username, "duplicate entry skipped");
                    report.skipped += 1;
                    continue;
                }
                valid.push(entry);
            }
            Err(reason) => {
                tracing::debug!(%kind, index, %reason, "invalid entry");
                report.errors.push(EntryError { index, reason });
            }
        }
    }

    report.imported = valid.len();
    tracing::info!(
        %kind,
        found = report.found,
        imported = report.imported,
        skipped = report.skipped,
        errors = report.errors.len(),
        "section imported"
    );

    (valid, report)
}

/// Check one `{"UserName": .., "Date": ..}` entry. Missing and `null` fields
/// count as absent; any other non-string value is invalid.
fn validate_entry(raw: &Value) -> Result<ValidEntry, String> {
    let Some(entry) = raw.as_object() else {
        return Err(format!("Entry is not an object: {}", raw));
    };

    let username = match entry.get("UserName") {
        None | Some(Value::Null) => "",
        Some(Value::String(name)) => name.trim(),
        Some(other) => return Err(format!("Invalid UserName: {}", other)),
    };
    if username.is_empty() {
        return Err("Missing UserName".to_string());
    }

    let date = match entry.get("Date") {
        None | Some(Value::Null) => parse_timestamp(""),
        Some(Value::String(raw)) => parse_timestamp(raw),
        Some(other) => return Err(format!("Invalid date: {}", other)),
    }
    .map_err(|_| {
        let raw = entry.get("Date").and_then(Value::as_str).unwrap_or_default();
        format!("Invalid date: {}", raw)
    })?;

    Ok(ValidEntry {
        username: username.to_string(),
        date,
    })
}
