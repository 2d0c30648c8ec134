use std::fmt;

use crate::presentation::view_models::{
    CheckViewModel, CreateView, SectionCheckViewModel, ViewMode,
};

/// Errors listed per section before the rest are summarised
const MAX_ERRORS_SHOWN: usize = 5;

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckView { data: self, mode })
    }
}

struct CheckView<'a> {
    data: &'a CheckViewModel,
    mode: ViewMode,
}

impl<'a> CheckView<'a> {
    fn render_section(
        &self,
        f: &mut fmt::Formatter,
        name: &str,
        section: &SectionCheckViewModel,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {} found, {} imported, {} duplicates, {} errors",
            name,
            section.found,
            section.imported,
            section.skipped,
            section.errors.len()
        )?;

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        let limit = if self.mode == ViewMode::Verbose {
            section.errors.len()
        } else {
            MAX_ERRORS_SHOWN
        };
        for error in section.errors.iter().take(limit) {
            writeln!(f, "  entry {}: {}", error.index, error.reason)?;
        }
        if section.errors.len() > limit {
            writeln!(f, "  ... and {} more", section.errors.len() - limit)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(
                f,
                "{} {} {}",
                self.data.followers.imported,
                self.data.following.imported,
                self.data.error_count()
            );
        }

        writeln!(f, "Export: {}", self.data.path)?;
        if let Some(date) = &self.data.export_date {
            writeln!(f, "Latest activity: {}", date)?;
        }
        writeln!(f)?;
        self.render_section(f, "Followers:", &self.data.followers)?;
        self.render_section(f, "Following:", &self.data.following)?;
        writeln!(f, "{:<10} {}", "Mutuals:", self.data.mutuals)
    }
}
