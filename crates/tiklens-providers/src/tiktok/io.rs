use chrono::{DateTime, Utc};
use std::path::Path;

use super::mapper::{ImportedRelationships, map_export};
use super::schema::TikTokExport;
use crate::{Error, Result};

/// Read a TikTok export file and extract its relationship records
pub fn import_file(path: &Path, imported_at: DateTime<Utc>) -> Result<ImportedRelationships> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "reading export");
    let text = std::fs::read_to_string(path)?;
    import_str(&text, imported_at)
}

/// Parse export JSON already held in memory
pub fn import_str(json: &str, imported_at: DateTime<Utc>) -> Result<ImportedRelationships> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(Error::Parse(
            "export root must be a JSON object".to_string(),
        ));
    }

    let export: TikTokExport = serde_json::from_value(value)?;
    Ok(map_export(&export, imported_at))
}

/// Point in time an export represents.
///
/// The most recent follower date, else the most recent following date, else
/// the file's modification time.
pub fn export_date(imported: &ImportedRelationships, path: &Path) -> Result<DateTime<Utc>> {
    let latest_follower = imported.followers.iter().map(|f| f.date_followed).max();
    let latest_following = imported.following.iter().map(|f| f.date_followed).max();

    if let Some(date) = latest_follower.or(latest_following) {
        return Ok(date);
    }

    let modified = std::fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}
