use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatsViewModel {
    pub total_followers: usize,
    pub total_following: usize,
    pub mutuals: usize,
    pub followers_only: usize,
    pub following_only: usize,
    pub follower_ratio: Option<f64>,
    pub weekly: GrowthViewModel,
    pub monthly: GrowthViewModel,
    pub top_days: Vec<TopDayViewModel>,
    pub as_of: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthViewModel {
    pub days: i64,
    pub new_followers: usize,
    pub new_following: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopDayViewModel {
    pub date: String,
    pub followers_gained: usize,
}
