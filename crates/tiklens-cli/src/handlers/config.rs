use anyhow::{Result, bail};
use std::path::PathBuf;

use super::HandlerContext;
use crate::config::Config;
use crate::presentation::ViewMode;
use crate::presentation::presenters::present_config;

pub fn handle_show(ctx: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    tracing::debug!(path = %path.display(), "showing config");
    ctx.render(present_config(&ctx.config, &path, Vec::new()))
}

pub struct ConfigUpdate {
    pub export: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub comparison_page_size: Option<usize>,
    pub mode: Option<ViewMode>,
}

pub fn handle_set(ctx: &HandlerContext, update: ConfigUpdate) -> Result<()> {
    let path = ctx.config_path();
    let mut config = ctx.config.clone();
    let updated = apply_update(&mut config, update)?;

    if updated.is_empty() {
        bail!(
            "Nothing to set. Use --export, --page-size, --comparison-page-size or --mode."
        );
    }

    config.save_to(&path)?;
    tracing::debug!(path = %path.display(), ?updated, "config saved");

    ctx.render(present_config(&config, &path, updated))
}

fn apply_update(config: &mut Config, update: ConfigUpdate) -> Result<Vec<String>> {
    let mut updated = Vec::new();

    if let Some(export) = update.export {
        let export = std::path::absolute(&export).unwrap_or(export);
        config.export_path = Some(export);
        updated.push("export".to_string());
    }
    if let Some(size) = update.page_size {
        if size == 0 {
            bail!("--page-size must be at least 1");
        }
        config.page_size = size;
        updated.push("page_size".to_string());
    }
    if let Some(size) = update.comparison_page_size {
        if size == 0 {
            bail!("--comparison-page-size must be at least 1");
        }
        config.comparison_page_size = size;
        updated.push("comparison_page_size".to_string());
    }
    if let Some(mode) = update.mode {
        config.view_mode = Some(mode);
        updated.push("mode".to_string());
    }

    Ok(updated)
}
