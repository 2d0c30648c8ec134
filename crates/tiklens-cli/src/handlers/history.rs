use anyhow::{Context as _, Result, bail};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tiklens_engine::{ExportSnapshot, HistoryPeriod, analyze_history, within_period};
use tiklens_providers::{discover_exports, export_date, import_file};
use tiklens_types::parse_timestamp;

use super::HandlerContext;
use crate::presentation::presenters::present_history;

pub fn handle(
    ctx: &HandlerContext,
    paths: Vec<PathBuf>,
    period: HistoryPeriod,
    now: Option<String>,
) -> Result<()> {
    let now = match now {
        Some(raw) => {
            parse_timestamp(&raw).with_context(|| format!("Invalid --now value '{}'", raw))?
        }
        None => Utc::now(),
    };

    let files = discover_exports(&paths)?;
    if files.is_empty() {
        bail!("No export files (*.json) found in the given paths");
    }

    let imported_at = Utc::now();
    let snapshots = files
        .iter()
        .map(|path| load_snapshot(path, imported_at))
        .collect::<Result<Vec<_>>>()?;

    let found = snapshots.len();
    let snapshots = within_period(snapshots, period, now);
    tracing::info!(found, kept = snapshots.len(), period = period.as_str(), "analysing export history");

    ctx.render(present_history(analyze_history(snapshots), period))
}

fn load_snapshot(path: &Path, imported_at: chrono::DateTime<Utc>) -> Result<ExportSnapshot> {
    let imported = import_file(path, imported_at)
        .with_context(|| format!("Failed to read export {}", path.display()))?;
    let date = export_date(&imported, path)?;

    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ExportSnapshot::new(label, date)
        .with_followers(imported.followers.into_iter().map(|f| f.username))
        .with_following(imported.following.into_iter().map(|f| f.username)))
}
