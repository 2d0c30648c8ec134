use anyhow::{Context as _, Result};
use chrono::Utc;
use std::path::PathBuf;
use tiklens_providers::{export_date, import_file};

use super::HandlerContext;
use crate::presentation::presenters::present_check;

pub fn handle(ctx: &HandlerContext, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => ctx.resolve_export()?,
    };

    let imported = import_file(&path, Utc::now())
        .with_context(|| format!("Failed to read export {}", path.display()))?;
    let date = export_date(&imported, &path).ok();

    ctx.render(present_check(&path, &imported, date))
}
