use tiklens_engine::Page;
use tiklens_types::{ComparisonRecord, FollowerRecord, FollowingRecord};

use super::card::{present_comparison_card, present_follower_card, present_following_card};
use crate::presentation::view_models::{
    CardListKind, CardListViewModel, CommandResultViewModel, Guidance, PaginationViewModel,
    RelationshipCardViewModel, StatusBadge,
};

pub fn present_follower_list(
    page: Page<FollowerRecord>,
    filters: Vec<String>,
) -> CommandResultViewModel<CardListViewModel> {
    present_card_list(
        CardListKind::Followers,
        page.map(|r| present_follower_card(&r)),
        filters,
        "tiklens followers list",
    )
}

pub fn present_following_list(
    page: Page<FollowingRecord>,
    filters: Vec<String>,
) -> CommandResultViewModel<CardListViewModel> {
    present_card_list(
        CardListKind::Following,
        page.map(|r| present_following_card(&r)),
        filters,
        "tiklens following list",
    )
}

pub fn present_comparison_list(
    kind: CardListKind,
    page: Page<ComparisonRecord>,
) -> CommandResultViewModel<CardListViewModel> {
    let command = match kind {
        CardListKind::FollowersOnly => "tiklens compare followers-only",
        CardListKind::FollowingOnly => "tiklens compare following-only",
        _ => "tiklens compare mutuals",
    };
    present_card_list(
        kind,
        page.map(|r| present_comparison_card(&r)),
        Vec::new(),
        command,
    )
}

fn present_card_list(
    kind: CardListKind,
    page: Page<RelationshipCardViewModel>,
    filters: Vec<String>,
    command: &str,
) -> CommandResultViewModel<CardListViewModel> {
    let pagination = PaginationViewModel {
        count: page.count,
        page: page.page,
        total_pages: page.total_pages,
        has_next: page.has_next,
    };

    let mut suggestions = Vec::new();
    if page.has_next {
        suggestions.push(
            Guidance::new("Show the next page")
                .with_command(format!("{} --page {}", command, page.page + 1)),
        );
    }
    if page.count == 0 && !filters.is_empty() {
        suggestions.push(Guidance::new("Nothing matched; try loosening the filters"));
    }

    let badge = if page.count > 0 && page.items.is_empty() {
        Some(StatusBadge::warning(format!(
            "Page {} is past the end ({} pages)",
            page.page, page.total_pages
        )))
    } else {
        None
    };

    let content = CardListViewModel {
        kind,
        cards: page.items,
        pagination,
        filters,
    };

    let result = CommandResultViewModel::new(content).with_suggestions(suggestions);
    match badge {
        Some(badge) => result.with_badge(badge),
        None => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use tiklens_engine::ListQuery;

    fn jan(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn followers(n: u32) -> Vec<FollowerRecord> {
        (1..=n)
            .map(|d| FollowerRecord::new(format!("user{}", d), jan(d), jan(31)))
            .collect()
    }

    #[test]
    fn test_next_page_suggestion() {
        let page = ListQuery::new().with_page(1, 2).apply(&followers(3));
        let result = present_follower_list(page, Vec::new());

        assert_eq!(result.content.cards.len(), 2);
        assert!(result.content.pagination.has_next);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("tiklens followers list --page 2")
        );
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_page_past_end_gets_warning_badge() {
        let page = ListQuery::new().with_page(5, 2).apply(&followers(3));
        let result = present_follower_list(page, Vec::new());

        assert!(result.content.cards.is_empty());
        assert!(result.badge.unwrap().label.contains("past the end"));
    }

    #[test]
    fn test_empty_filtered_list_suggests_loosening() {
        let page = ListQuery::new().with_search("zzz").apply(&followers(3));
        let result = present_follower_list(page, vec!["search: zzz".to_string()]);

        assert_eq!(result.content.pagination.count, 0);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].command.is_none());
    }

    #[test]
    fn test_comparison_list_uses_comparison_cards() {
        let record = ComparisonRecord {
            username: "alice".to_string(),
            date_followed: Some(jan(15)),
            date_following: Some(jan(20)),
            is_mutual: true,
        };
        let result =
            present_comparison_list(CardListKind::Mutuals, Page::paginate(vec![record], 1, 100));

        assert_eq!(result.content.kind, CardListKind::Mutuals);
        assert_eq!(result.content.cards[0].date_lines.len(), 2);
    }
}
