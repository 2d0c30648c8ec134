use serde::Serialize;

use super::common::StatusLevel;

/// Bottom bar of the card browser
#[derive(Debug, Clone, Serialize)]
pub struct BrowseStatusViewModel {
    pub title: String,
    /// 1-based; zero when the list is empty
    pub position: usize,
    pub total: usize,
    pub message: Option<String>,
    pub level: StatusLevel,
}
