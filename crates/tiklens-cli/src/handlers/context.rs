use anyhow::{Context as _, Result, bail};
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use tiklens_providers::{ImportedRelationships, import_file};

use crate::config::Config;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};

/// Everything a handler needs besides its own arguments
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
    pub data_dir: PathBuf,
    pub config: Config,
    export_override: Option<PathBuf>,
}

impl HandlerContext {
    pub fn new(
        format: OutputFormat,
        view_mode: Option<ViewMode>,
        data_dir: PathBuf,
        config: Config,
        export_override: Option<PathBuf>,
    ) -> Self {
        let view_mode = view_mode.or(config.view_mode).unwrap_or_default();
        Self {
            format,
            view_mode,
            data_dir,
            config,
            export_override,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// `--export`, then the configured export
    pub fn resolve_export(&self) -> Result<PathBuf> {
        if let Some(path) = self.export_override.as_ref().or(self.config.export_path.as_ref()) {
            return Ok(path.clone());
        }
        bail!(
            "No export file given.\n\n\
             Pass one with --export <PATH>, or save a default:\n  \
             tiklens config set --export <PATH>"
        )
    }

    pub fn load_export(&self) -> Result<ImportedRelationships> {
        let path = self.resolve_export()?;
        tracing::debug!(path = %path.display(), "loading export");

        let imported = import_file(&path, Utc::now())
            .with_context(|| format!("Failed to read export {}", path.display()))?;

        let errors = imported.report.error_count();
        if errors > 0 {
            tracing::warn!(
                errors,
                "some export entries could not be read; run `tiklens check` for details"
            );
        }
        Ok(imported)
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format, self.view_mode);
        renderer.render(view_model)
    }
}
