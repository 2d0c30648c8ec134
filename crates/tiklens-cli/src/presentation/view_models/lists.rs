use serde::Serialize;

use super::card::RelationshipCardViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardListKind {
    Followers,
    Following,
    Mutuals,
    FollowersOnly,
    FollowingOnly,
}

impl CardListKind {
    pub fn title(&self) -> &'static str {
        match self {
            CardListKind::Followers => "Followers",
            CardListKind::Following => "Following",
            CardListKind::Mutuals => "Mutuals",
            CardListKind::FollowersOnly => "Followers you don't follow back",
            CardListKind::FollowingOnly => "Following who don't follow you back",
        }
    }

    /// Noun for counts: (singular, plural)
    pub fn noun(&self) -> (&'static str, &'static str) {
        match self {
            CardListKind::Followers | CardListKind::FollowersOnly => ("follower", "followers"),
            CardListKind::Following | CardListKind::FollowingOnly => ("account", "accounts"),
            CardListKind::Mutuals => ("mutual", "mutuals"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationViewModel {
    pub count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardListViewModel {
    pub kind: CardListKind,
    pub cards: Vec<RelationshipCardViewModel>,
    pub pagination: PaginationViewModel,
    /// Active filters, e.g. `search: ali`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,
}
