use std::fmt;

use crate::presentation::view_models::{CreateView, GrowthViewModel, StatsViewModel, ViewMode};

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatsView { data: self, mode })
    }
}

struct StatsView<'a> {
    data: &'a StatsViewModel,
    mode: ViewMode,
}

impl<'a> StatsView<'a> {
    fn ratio(&self) -> String {
        match self.data.follower_ratio {
            Some(ratio) => format!("{:.2}", ratio),
            None => "n/a".to_string(),
        }
    }

    fn growth_line(label: &str, growth: &GrowthViewModel) -> String {
        format!(
            "{:<14} +{} followers, +{} following",
            label, growth.new_followers, growth.new_following
        )
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "followers={} following={} mutuals={} ratio={}",
            self.data.total_followers,
            self.data.total_following,
            self.data.mutuals,
            self.ratio()
        )
    }

    fn render_totals(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<14} {}", "Followers:", self.data.total_followers)?;
        writeln!(f, "{:<14} {}", "Following:", self.data.total_following)?;
        writeln!(f, "{:<14} {}", "Mutuals:", self.data.mutuals)?;
        writeln!(f, "{:<14} {}", "Ratio:", self.ratio())
    }

    fn render_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Relationship stats (as of {})", self.data.as_of)?;
        writeln!(f)?;
        self.render_totals(f)?;
        writeln!(
            f,
            "{:<14} {}",
            "Not following:", self.data.followers_only
        )?;
        writeln!(
            f,
            "{:<14} {}",
            "Not followed:", self.data.following_only
        )?;
        writeln!(f)?;
        writeln!(f, "{}", Self::growth_line("Last 7 days:", &self.data.weekly))?;
        writeln!(f, "{}", Self::growth_line("Last 30 days:", &self.data.monthly))?;

        if self.data.top_days.is_empty() {
            return Ok(());
        }

        let shown = if self.mode == ViewMode::Verbose {
            self.data.top_days.len()
        } else {
            self.data.top_days.len().min(5)
        };

        writeln!(f)?;
        writeln!(f, "Top follower days:")?;
        for day in &self.data.top_days[..shown] {
            writeln!(f, "  {:<14} {}", day.date, day.followers_gained)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_totals(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_full(f),
        }
    }
}
