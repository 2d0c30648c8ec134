use serde::Serialize;
use tiklens_engine::HistoryPeriod;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryViewModel {
    pub period: HistoryPeriod,
    pub snapshots: Vec<SnapshotViewModel>,
    pub periods: Vec<PeriodViewModel>,
    pub total_follower_growth: i64,
    pub total_following_growth: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotViewModel {
    pub label: String,
    pub date: String,
    pub followers: usize,
    pub following: usize,
    pub followers_gained: usize,
    pub followers_lost: usize,
    pub following_gained: usize,
    pub following_lost: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodViewModel {
    pub from: String,
    pub to: String,
    pub days_between: i64,
    pub net_followers: i64,
    pub net_following: i64,
    pub followers_gained: NameChangeViewModel,
    pub followers_lost: NameChangeViewModel,
    pub following_gained: NameChangeViewModel,
    pub following_lost: NameChangeViewModel,
}

/// A set of usernames that changed; names are listed only for small sets
#[derive(Debug, Clone, Serialize)]
pub struct NameChangeViewModel {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}
