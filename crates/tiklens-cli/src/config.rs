use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tiklens_engine::DEFAULT_PAGE_SIZE;

use crate::presentation::ViewMode;

pub const CONFIG_FILE: &str = "config.toml";

/// `<data-dir>/config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export used when `--export` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
    /// Cards per page for follower and following lists
    pub page_size: usize,
    /// Cards per page for comparisons
    pub comparison_page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            comparison_page_size: 100,
            view_mode: None,
        }
    }
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
