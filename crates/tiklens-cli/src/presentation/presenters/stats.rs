use chrono::{DateTime, Utc};
use tiklens_engine::{GrowthWindow, RelationshipStats};

use crate::presentation::formatters::time::{format_date, format_datetime};
use crate::presentation::view_models::{
    CommandResultViewModel, GrowthViewModel, Guidance, StatsViewModel, TopDayViewModel,
};

pub fn present_stats(
    stats: RelationshipStats,
    now: DateTime<Utc>,
) -> CommandResultViewModel<StatsViewModel> {
    let top_days = stats
        .top_acquisition_dates
        .iter()
        .filter_map(|day| {
            day.date.and_hms_opt(0, 0, 0).map(|midnight| TopDayViewModel {
                date: format_date(midnight.and_utc()),
                followers_gained: day.followers_gained,
            })
        })
        .collect();

    let content = StatsViewModel {
        total_followers: stats.total_followers,
        total_following: stats.total_following,
        mutuals: stats.mutuals_count,
        followers_only: stats.followers_only_count,
        following_only: stats.following_only_count,
        follower_ratio: stats.follower_ratio,
        weekly: present_growth(stats.weekly_growth),
        monthly: present_growth(stats.monthly_growth),
        top_days,
        as_of: format_datetime(now),
    };

    let mut result = CommandResultViewModel::new(content);
    if stats.following_only_count > 0 {
        result = result.with_suggestion(
            Guidance::new("See who doesn't follow you back")
                .with_command("tiklens compare following-only"),
        );
    }
    if stats.followers_only_count > 0 {
        result = result.with_suggestion(
            Guidance::new("See followers you haven't followed back")
                .with_command("tiklens compare followers-only"),
        );
    }
    result
}

fn present_growth(window: GrowthWindow) -> GrowthViewModel {
    GrowthViewModel {
        days: window.days,
        new_followers: window.followers,
        new_following: window.following,
    }
}
