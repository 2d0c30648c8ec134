use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Usernames captured by one export at one point in time
#[derive(Debug, Clone)]
pub struct ExportSnapshot {
    /// Usually the export's file name
    pub label: String,
    pub date: DateTime<Utc>,
    pub followers: BTreeSet<String>,
    pub following: BTreeSet<String>,
}

impl ExportSnapshot {
    pub fn new(label: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            date,
            followers: BTreeSet::new(),
            following: BTreeSet::new(),
        }
    }

    pub fn with_followers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.followers.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_following<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.following.extend(names.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub label: String,
    pub date: DateTime<Utc>,
    pub followers_count: usize,
    pub following_count: usize,
    /// Relative to the previous snapshot; zero for the first
    pub followers_gained: usize,
    pub followers_lost: usize,
    pub following_gained: usize,
    pub following_lost: usize,
}

/// What changed between two consecutive snapshots
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PeriodChange {
    pub from: String,
    pub to: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub days_between: i64,
    pub followers_gained: Vec<String>,
    pub followers_lost: Vec<String>,
    pub following_gained: Vec<String>,
    pub following_lost: Vec<String>,
    pub net_followers: i64,
    pub net_following: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct HistoryAnalysis {
    pub snapshots: Vec<SnapshotSummary>,
    pub changes: Vec<PeriodChange>,
    /// Last snapshot minus first
    pub total_follower_growth: i64,
    pub total_following_growth: i64,
}

/// How far back `history` looks, counted from a reference time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPeriod {
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl HistoryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryPeriod::Week => "week",
            HistoryPeriod::Month => "month",
            HistoryPeriod::Year => "year",
            HistoryPeriod::All => "all",
        }
    }

    pub fn days(&self) -> Option<i64> {
        match self {
            HistoryPeriod::Week => Some(7),
            HistoryPeriod::Month => Some(30),
            HistoryPeriod::Year => Some(365),
            HistoryPeriod::All => None,
        }
    }

    /// Earliest snapshot date kept; `None` keeps everything
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|days| now - Duration::days(days))
    }
}

/// Drop snapshots dated before the period's start
pub fn within_period(
    snapshots: Vec<ExportSnapshot>,
    period: HistoryPeriod,
    now: DateTime<Utc>,
) -> Vec<ExportSnapshot> {
    match period.start(now) {
        Some(start) => snapshots.into_iter().filter(|s| s.date >= start).collect(),
        None => snapshots,
    }
}

/// Order snapshots by date and diff each consecutive pair
pub fn analyze_history(mut snapshots: Vec<ExportSnapshot>) -> HistoryAnalysis {
    snapshots.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.label.cmp(&b.label)));

    let changes: Vec<PeriodChange> = snapshots
        .windows(2)
        .map(|pair| period_change(&pair[0], &pair[1]))
        .collect();

    let summaries = snapshots
        .iter()
        .enumerate()
        .map(|(i, snapshot)| {
            let previous = i.checked_sub(1).and_then(|p| changes.get(p));
            SnapshotSummary {
                label: snapshot.label.clone(),
                date: snapshot.date,
                followers_count: snapshot.followers.len(),
                following_count: snapshot.following.len(),
                followers_gained: previous.map_or(0, |c| c.followers_gained.len()),
                followers_lost: previous.map_or(0, |c| c.followers_lost.len()),
                following_gained: previous.map_or(0, |c| c.following_gained.len()),
                following_lost: previous.map_or(0, |c| c.following_lost.len()),
            }
        })
        .collect();

    let (total_follower_growth, total_following_growth) = match (snapshots.first(), snapshots.last())
    {
        (Some(first), Some(last)) => (
            signed_diff(last.followers.len(), first.followers.len()),
            signed_diff(last.following.len(), first.following.len()),
        ),
        _ => (0, 0),
    };

    HistoryAnalysis {
        snapshots: summaries,
        changes,
        total_follower_growth,
        total_following_growth,
    }
}

fn period_change(from: &ExportSnapshot, to: &ExportSnapshot) -> PeriodChange {
    PeriodChange {
        from: from.label.clone(),
        to: to.label.clone(),
        from_date: from.date,
        to_date: to.date,
        days_between: (to.date - from.date).num_days(),
        followers_gained: difference(&to.followers, &from.followers),
        followers_lost: difference(&from.followers, &to.followers),
        following_gained: difference(&to.following, &from.following),
        following_lost: difference(&from.following, &to.following),
        net_followers: signed_diff(to.followers.len(), from.followers.len()),
        net_following: signed_diff(to.following.len(), from.following.len()),
    }
}

fn difference(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.difference(b).cloned().collect()
}

fn signed_diff(a: usize, b: usize) -> i64 {
    a as i64 - b as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_changes_between_snapshots() {
        let january = ExportSnapshot::new("jan.json", day(1))
            .with_followers(["alice", "bob"])
            .with_following(["alice"]);
        let later = ExportSnapshot::new("later.json", day(11))
            .with_followers(["alice", "carol", "dave"])
            .with_following(["alice", "erin"]);

        // Passed out of order on purpose
        let analysis = analyze_history(vec![later, january]);

        assert_eq!(analysis.snapshots[0].label, "jan.json");
        assert_eq!(analysis.changes.len(), 1);

        let change = &analysis.changes[0];
        assert_eq!(change.days_between, 10);
        assert_eq!(change.followers_gained, vec!["carol", "dave"]);
        assert_eq!(change.followers_lost, vec!["bob"]);
        assert_eq!(change.following_gained, vec!["erin"]);
        assert!(change.following_lost.is_empty());
        assert_eq!(change.net_followers, 1);
        assert_eq!(change.net_following, 1);
    }

    #[test]
    fn test_summaries_are_relative_to_previous() {
        let analysis = analyze_history(vec![
            ExportSnapshot::new("a", day(1)).with_followers(["x", "y"]),
            ExportSnapshot::new("b", day(2)).with_followers(["x"]),
            ExportSnapshot::new("c", day(3)).with_followers(["x", "z", "w"]),
        ]);

        let first = &analysis.snapshots[0];
        assert_eq!((first.followers_gained, first.followers_lost), (0, 0));

        let second = &analysis.snapshots[1];
        assert_eq!(second.followers_count, 1);
        assert_eq!((second.followers_gained, second.followers_lost), (0, 1));

        let third = &analysis.snapshots[2];
        assert_eq!((third.followers_gained, third.followers_lost), (2, 0));

        assert_eq!(analysis.total_follower_growth, 1);
        assert_eq!(analysis.total_following_growth, 0);
    }

    #[test]
    fn test_single_snapshot_has_no_changes() {
        let analysis =
            analyze_history(vec![ExportSnapshot::new("only", day(5)).with_followers(["a"])]);
        assert!(analysis.changes.is_empty());
        assert_eq!(analysis.snapshots.len(), 1);
        assert_eq!(analysis.total_follower_growth, 0);
    }

    #[test]
    fn test_no_snapshots() {
        assert_eq!(analyze_history(Vec::new()), HistoryAnalysis::default());
    }

    #[test]
    fn test_period_keeps_recent_snapshots() {
        let now = day(31);
        let snapshots = vec![
            ExportSnapshot::new("old.json", day(1)),
            ExportSnapshot::new("edge.json", day(24)),
            ExportSnapshot::new("new.json", day(30)),
        ];

        let labels = |kept: Vec<ExportSnapshot>| -> Vec<String> {
            kept.into_iter().map(|s| s.label).collect()
        };

        assert_eq!(
            labels(within_period(snapshots.clone(), HistoryPeriod::Week, now)),
            vec!["edge.json", "new.json"]
        );
        assert_eq!(
            labels(within_period(snapshots.clone(), HistoryPeriod::Month, now)),
            vec!["old.json", "edge.json", "new.json"]
        );
        assert_eq!(within_period(snapshots, HistoryPeriod::All, now).len(), 3);
        assert_eq!(HistoryPeriod::Year.start(now), Some(now - Duration::days(365)));
    }
}
