use chrono::{DateTime, Utc};
use tiklens_types::{ComparisonRecord, FollowerRecord, FollowingRecord};

use crate::presentation::formatters::time::format_date;
use crate::presentation::view_models::{CardBadge, RelationshipCardViewModel};

/// Everything a card is rendered from. Record adapters build one of these;
/// direct callers can use the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardInput {
    pub username: String,
    pub date_followed: Option<DateTime<Utc>>,
    pub date_following: Option<DateTime<Utc>>,
    pub is_mutual: bool,
}

impl CardInput {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn followed(mut self, date: DateTime<Utc>) -> Self {
        self.date_followed = Some(date);
        self
    }

    pub fn following(mut self, date: DateTime<Utc>) -> Self {
        self.date_following = Some(date);
        self
    }

    pub fn mutual(mut self, is_mutual: bool) -> Self {
        self.is_mutual = is_mutual;
        self
    }
}

pub fn render_card(input: CardInput) -> RelationshipCardViewModel {
    RelationshipCardViewModel {
        avatar_glyph: avatar_glyph(&input.username),
        handle_label: format!("@{}", input.username),
        mutual_badge: input.is_mutual.then(CardBadge::mutual),
        date_lines: date_lines(input.date_followed, input.date_following),
        username: input.username,
    }
}

pub fn present_follower_card(record: &FollowerRecord) -> RelationshipCardViewModel {
    render_card(
        CardInput::new(record.username.clone())
            .followed(record.date_followed)
            .mutual(record.is_mutual),
    )
}

/// A following record's date is when the owner followed the account
pub fn present_following_card(record: &FollowingRecord) -> RelationshipCardViewModel {
    render_card(
        CardInput::new(record.username.clone())
            .following(record.date_followed)
            .mutual(record.is_mutual),
    )
}

pub fn present_comparison_card(record: &ComparisonRecord) -> RelationshipCardViewModel {
    render_card(CardInput {
        username: record.username.clone(),
        date_followed: record.date_followed,
        date_following: record.date_following,
        is_mutual: record.is_mutual,
    })
}

fn avatar_glyph(username: &str) -> String {
    match username.chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "?".to_string(),
    }
}

fn date_lines(
    followed: Option<DateTime<Utc>>,
    following: Option<DateTime<Utc>>,
) -> Vec<String> {
    match (followed, following) {
        (Some(followed), Some(following)) => vec![
            format!("Followed you: {}", format_date(followed)),
            format!("You followed: {}", format_date(following)),
        ],
        (Some(followed), None) => vec![format!("Followed: {}", format_date(followed))],
        (None, Some(following)) => vec![format!("Following since: {}", format_date(following))],
        (None, None) => Vec::new(),
    }
}
