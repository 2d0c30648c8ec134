use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, ViewMode};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.data.file_exists { "" } else { " (not created yet)" };
        writeln!(f, "Config file: {}{}", self.data.config_path, suffix)?;
        writeln!(f)?;
        writeln!(
            f,
            "export               = {}",
            self.data.export_path.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "page_size            = {}", self.data.page_size)?;
        writeln!(f, "comparison_page_size = {}", self.data.comparison_page_size)?;
        writeln!(
            f,
            "mode                 = {}",
            self.data.view_mode.as_deref().unwrap_or("(default)")
        )?;

        if !self.data.updated.is_empty() {
            writeln!(f)?;
            writeln!(f, "Updated: {}", self.data.updated.join(", "))?;
        }
        Ok(())
    }
}
