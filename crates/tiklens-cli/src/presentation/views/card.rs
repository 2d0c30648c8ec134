use std::fmt;

use crate::presentation::formatters::profile_url;
use crate::presentation::view_models::{RelationshipCardViewModel, ViewMode};

// --------------------------------------------------------
// Relationship Card View
// --------------------------------------------------------

pub struct CardView<'a> {
    data: &'a RelationshipCardViewModel,
    mode: ViewMode,
}

impl<'a> CardView<'a> {
    pub fn new(data: &'a RelationshipCardViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn headline(&self) -> String {
        let mut line = format!("[{}] {}", self.data.avatar_glyph, self.data.handle_label);
        if let Some(badge) = &self.data.mutual_badge {
            line.push_str(&format!("  {} {}", badge.icon.glyph(), badge.label));
        }
        line
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.handle_label)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = vec![self.headline()];
        parts.extend(self.data.date_lines.iter().cloned());
        writeln!(f, "{}", parts.join("  "))
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        for line in &self.data.date_lines {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        if !self.data.username.is_empty() {
            writeln!(f, "    Profile: {}", profile_url(&self.data.username))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
