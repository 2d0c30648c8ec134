use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    config: &Config,
    config_path: &Path,
    updated: Vec<String>,
) -> CommandResultViewModel<ConfigViewModel> {
    let changed = !updated.is_empty();
    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        file_exists: config_path.exists(),
        export_path: config.export_path.as_ref().map(|p| p.display().to_string()),
        page_size: config.page_size,
        comparison_page_size: config.comparison_page_size,
        view_mode: config.view_mode.map(|m| m.as_str().to_string()),
        updated,
    };

    let mut result = CommandResultViewModel::new(content);
    if changed {
        result = result.with_badge(StatusBadge::success("Configuration saved"));
    }
    if config.export_path.is_none() {
        result = result.with_suggestion(
            Guidance::new("Point tiklens at your TikTok data export")
                .with_command("tiklens config set --export <PATH>"),
        );
    }
    result
}
