use std::fmt;

use crate::presentation::formatters::{format_day_span, signed};
use crate::presentation::view_models::{
    CreateView, HistoryViewModel, NameChangeViewModel, PeriodViewModel, ViewMode,
};

impl CreateView for HistoryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(HistoryView { data: self, mode })
    }
}

struct HistoryView<'a> {
    data: &'a HistoryViewModel,
    mode: ViewMode,
}

impl<'a> HistoryView<'a> {
    fn render_snapshots(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<24} {:<14} {:>9} {:>9}",
            "EXPORT", "DATE", "FOLLOWERS", "FOLLOWING"
        )?;
        for snapshot in &self.data.snapshots {
            writeln!(
                f,
                "{:<24} {:<14} {:>9} {:>9}",
                snapshot.label, snapshot.date, snapshot.followers, snapshot.following
            )?;
        }
        Ok(())
    }

    fn render_period(&self, f: &mut fmt::Formatter, period: &PeriodViewModel) -> fmt::Result {
        writeln!(
            f,
            "{} → {} ({})",
            period.from,
            period.to,
            format_day_span(period.days_between)
        )?;
        writeln!(
            f,
            "  followers {}  following {}",
            signed(period.net_followers),
            signed(period.net_following)
        )?;

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        render_names(f, "new followers", &period.followers_gained)?;
        render_names(f, "lost followers", &period.followers_lost)?;
        render_names(f, "newly followed", &period.following_gained)?;
        render_names(f, "unfollowed", &period.following_lost)
    }
}

fn render_names(f: &mut fmt::Formatter, label: &str, change: &NameChangeViewModel) -> fmt::Result {
    if change.count == 0 {
        return Ok(());
    }
    match &change.names {
        Some(names) => writeln!(f, "  {} ({}): {}", label, change.count, names.join(", ")),
        None => writeln!(f, "  {}: {}", label, change.count),
    }
}

impl<'a> fmt::Display for HistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(
                f,
                "followers {} following {}",
                signed(self.data.total_follower_growth),
                signed(self.data.total_following_growth)
            );
        }

        if let Some(days) = self.data.period.days() {
            writeln!(
                f,
                "Period: last {} ({} days)",
                self.data.period.as_str(),
                days
            )?;
            writeln!(f)?;
        }

        self.render_snapshots(f)?;

        for period in &self.data.periods {
            writeln!(f)?;
            self.render_period(f, period)?;
        }

        if !self.data.periods.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Overall: followers {}, following {}",
                signed(self.data.total_follower_growth),
                signed(self.data.total_following_growth)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_history;
    use chrono::{TimeZone, Utc};
    use tiklens_engine::{ExportSnapshot, HistoryPeriod, analyze_history};

    fn sample() -> HistoryViewModel {
        let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
        let analysis = analyze_history(vec![
            ExportSnapshot::new("jan-01.json", day(1))
                .with_followers(["alice", "bob"])
                .with_following(["alice"]),
            ExportSnapshot::new("jan-08.json", day(8))
                .with_followers(["alice", "carol", "dave"])
                .with_following(["alice"]),
        ]);
        present_history(analysis, HistoryPeriod::All).content
    }

    #[test]
    fn test_history_standard() {
        let history = sample();
        insta::assert_snapshot!(history.create_view(ViewMode::Standard).to_string(), @r"
        EXPORT                   DATE           FOLLOWERS FOLLOWING
        jan-01.json              Jan 1, 2024            2         1
        jan-08.json              Jan 8, 2024            3         1

        jan-01.json (Jan 1, 2024) → jan-08.json (Jan 8, 2024) (7 days)
          followers +1  following 0
          new followers (2): carol, dave
          lost followers (1): bob

        Overall: followers +1, following 0
        ");
    }

    #[test]
    fn test_history_minimal() {
        let history = sample();
        assert_eq!(
            history.create_view(ViewMode::Minimal).to_string(),
            "followers +1 following 0\n"
        );
    }

    #[test]
    fn test_history_period_header() {
        let history = HistoryViewModel {
            period: HistoryPeriod::Month,
            ..sample()
        };
        let text = history.create_view(ViewMode::Compact).to_string();
        assert!(text.starts_with("Period: last month (30 days)\n\nEXPORT"));
    }
}
