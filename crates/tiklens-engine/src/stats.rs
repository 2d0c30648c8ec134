use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use tiklens_types::{FollowerRecord, FollowingRecord};

const TOP_ACQUISITION_DATES: usize = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RelationshipStats {
    pub total_followers: usize,
    pub total_following: usize,
    pub mutuals_count: usize,
    pub followers_only_count: usize,
    pub following_only_count: usize,
    /// Followers per account followed, `None` when following nobody
    pub follower_ratio: Option<f64>,
    pub weekly_growth: GrowthWindow,
    pub monthly_growth: GrowthWindow,
    pub top_acquisition_dates: Vec<AcquisitionDate>,
}

/// New relationships inside a trailing window
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GrowthWindow {
    pub days: i64,
    pub followers: usize,
    pub following: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AcquisitionDate {
    pub date: NaiveDate,
    pub followers_gained: usize,
}

/// Aggregate statistics; `now` anchors the weekly and monthly windows
pub fn relationship_stats(
    followers: &[FollowerRecord],
    following: &[FollowingRecord],
    now: DateTime<Utc>,
) -> RelationshipStats {
    let follower_names: HashSet<&str> = followers.iter().map(|f| f.username.as_str()).collect();
    let following_names: HashSet<&str> = following.iter().map(|f| f.username.as_str()).collect();

    let mutuals_count = follower_names.intersection(&following_names).count();

    RelationshipStats {
        total_followers: follower_names.len(),
        total_following: following_names.len(),
        mutuals_count,
        followers_only_count: follower_names.len() - mutuals_count,
        following_only_count: following_names.len() - mutuals_count,
        follower_ratio: follower_ratio(follower_names.len(), following_names.len()),
        weekly_growth: growth_window(followers, following, now, 7),
        monthly_growth: growth_window(followers, following, now, 30),
        top_acquisition_dates: top_acquisition_dates(followers),
    }
}

fn follower_ratio(followers: usize, following: usize) -> Option<f64> {
    if following == 0 {
        return None;
    }
    // Half-to-even, so 0.125 -> 0.12 and 0.375 -> 0.38
    let ratio = followers as f64 / following as f64;
    Some((ratio * 100.0).round_ties_even() / 100.0)
}

fn growth_window(
    followers: &[FollowerRecord],
    following: &[FollowingRecord],
    now: DateTime<Utc>,
    days: i64,
) -> GrowthWindow {
    let since = now - Duration::days(days);
    GrowthWindow {
        days,
        followers: followers.iter().filter(|f| f.date_followed >= since).count(),
        following: following.iter().filter(|f| f.date_followed >= since).count(),
    }
}

fn top_acquisition_dates(followers: &[FollowerRecord]) -> Vec<AcquisitionDate> {
    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for follower in followers {
        *per_day.entry(follower.date_followed.date_naive()).or_default() += 1;
    }

    let mut days: Vec<AcquisitionDate> = per_day
        .into_iter()
        .map(|(date, followers_gained)| AcquisitionDate {
            date,
            followers_gained,
        })
        .collect();
    days.sort_by_key(|d| (Reverse(d.followers_gained), Reverse(d.date)));
    days.truncate(TOP_ACQUISITION_DATES);
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_and_ratio() {
        let now = at(3, 1);
        let followers = vec![
            FollowerRecord::new("a", at(1, 1), now),
            FollowerRecord::new("b", at(1, 2), now),
            FollowerRecord::new("c", at(1, 3), now),
        ];
        let following = vec![
            FollowingRecord::new("a", at(1, 1), now),
            FollowingRecord::new("z", at(1, 1), now),
        ];

        let stats = relationship_stats(&followers, &following, now);

        assert_eq!(stats.total_followers, 3);
        assert_eq!(stats.total_following, 2);
        assert_eq!(stats.mutuals_count, 1);
        assert_eq!(stats.followers_only_count, 2);
        assert_eq!(stats.following_only_count, 1);
        assert_eq!(stats.follower_ratio, Some(1.5));
    }

    #[test]
    fn test_ratio_rounds_to_two_places() {
        assert_eq!(follower_ratio(2, 3), Some(0.67));
        assert_eq!(follower_ratio(5, 0), None);
    }

    #[test]
    fn test_ratio_ties_round_to_even() {
        assert_eq!(follower_ratio(1, 8), Some(0.12));
        assert_eq!(follower_ratio(3, 8), Some(0.38));
    }

    #[test]
    fn test_growth_windows() {
        let now = at(3, 1);
        let followers = vec![
            FollowerRecord::new("recent", at(2, 27), now),
            FollowerRecord::new("this_month", at(2, 10), now),
            FollowerRecord::new("old", at(1, 1), now),
        ];
        let following = vec![FollowingRecord::new("x", at(2, 28), now)];

        let stats = relationship_stats(&followers, &following, now);

        assert_eq!(
            stats.weekly_growth,
            GrowthWindow {
                days: 7,
                followers: 1,
                following: 1
            }
        );
        assert_eq!(stats.monthly_growth.followers, 2);
    }

    #[test]
    fn test_top_acquisition_dates_order() {
        let now = at(3, 1);
        let followers = vec![
            FollowerRecord::new("a", at(1, 5), now),
            FollowerRecord::new("b", at(1, 5), now),
            FollowerRecord::new("c", at(1, 6), now),
            FollowerRecord::new("d", at(1, 7), now),
        ];

        let stats = relationship_stats(&followers, &[], now);
        let dates: Vec<_> = stats
            .top_acquisition_dates
            .iter()
            .map(|d| (d.date.to_string(), d.followers_gained))
            .collect();

        assert_eq!(
            dates,
            vec![
                ("2024-01-05".to_string(), 2),
                ("2024-01-07".to_string(), 1),
                ("2024-01-06".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_acquisition_dates_capped() {
        let now = at(3, 1);
        let followers: Vec<_> = (1..=15)
            .map(|day| FollowerRecord::new(format!("u{}", day), at(1, day), now))
            .collect();

        let stats = relationship_stats(&followers, &[], now);
        assert_eq!(stats.top_acquisition_dates.len(), 10);
    }

    #[test]
    fn test_empty_lists() {
        let stats = relationship_stats(&[], &[], at(3, 1));
        assert_eq!(stats.total_followers, 0);
        assert_eq!(stats.follower_ratio, None);
        assert!(stats.top_acquisition_dates.is_empty());
    }
}
