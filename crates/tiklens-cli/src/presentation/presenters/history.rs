use tiklens_engine::{HistoryAnalysis, HistoryPeriod, PeriodChange, SnapshotSummary};

use crate::presentation::formatters::time::format_date;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, HistoryViewModel, NameChangeViewModel, PeriodViewModel,
    SnapshotViewModel, StatusBadge,
};

/// Above this many names a period only reports the count
pub const MAX_LISTED_NAMES: usize = 10;

pub fn present_history(
    analysis: HistoryAnalysis,
    period: HistoryPeriod,
) -> CommandResultViewModel<HistoryViewModel> {
    let snapshot_count = analysis.snapshots.len();

    let content = HistoryViewModel {
        period,
        snapshots: analysis.snapshots.iter().map(present_snapshot).collect(),
        periods: analysis.changes.iter().map(present_period).collect(),
        total_follower_growth: analysis.total_follower_growth,
        total_following_growth: analysis.total_following_growth,
    };

    let result = CommandResultViewModel::new(content);
    if snapshot_count == 0 {
        result
            .with_badge(StatusBadge::warning(format!(
                "No exports dated within the last {}",
                period.as_str()
            )))
            .with_suggestion(
                Guidance::new("Widen the window").with_command("tiklens history <DIR> --period all"),
            )
    } else if snapshot_count < 2 {
        result
            .with_badge(StatusBadge::info("Only one export; nothing to compare"))
            .with_suggestion(
                Guidance::new("Pass two or more exports, or a directory of them")
                    .with_command("tiklens history <DIR>"),
            )
    } else {
        result.with_badge(StatusBadge::success(format!(
            "Compared {} exports",
            snapshot_count
        )))
    }
}

fn present_snapshot(summary: &SnapshotSummary) -> SnapshotViewModel {
    SnapshotViewModel {
        label: summary.label.clone(),
        date: format_date(summary.date),
        followers: summary.followers_count,
        following: summary.following_count,
        followers_gained: summary.followers_gained,
        followers_lost: summary.followers_lost,
        following_gained: summary.following_gained,
        following_lost: summary.following_lost,
    }
}

fn present_period(change: &PeriodChange) -> PeriodViewModel {
    PeriodViewModel {
        from: format!("{} ({})", change.from, format_date(change.from_date)),
        to: format!("{} ({})", change.to, format_date(change.to_date)),
        days_between: change.days_between,
        net_followers: change.net_followers,
        net_following: change.net_following,
        followers_gained: present_names(&change.followers_gained),
        followers_lost: present_names(&change.followers_lost),
        following_gained: present_names(&change.following_gained),
        following_lost: present_names(&change.following_lost),
    }
}

fn present_names(names: &[String]) -> NameChangeViewModel {
    NameChangeViewModel {
        count: names.len(),
        names: (!names.is_empty() && names.len() <= MAX_LISTED_NAMES).then(|| names.to_vec()),
    }
}
