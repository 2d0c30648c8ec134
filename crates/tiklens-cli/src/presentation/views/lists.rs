use std::fmt;

use super::card::CardView;
use crate::presentation::formatters::pluralize;
use crate::presentation::view_models::{CardListViewModel, CreateView, ViewMode};

impl CreateView for CardListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CardListView { data: self, mode })
    }
}

struct CardListView<'a> {
    data: &'a CardListViewModel,
    mode: ViewMode,
}

impl<'a> CardListView<'a> {
    fn header(&self) -> String {
        let (singular, plural) = self.data.kind.noun();
        let pagination = &self.data.pagination;
        let mut header = format!(
            "{} · {}",
            self.data.kind.title(),
            pluralize(pagination.count, singular, plural)
        );
        if pagination.total_pages > 1 {
            header.push_str(&format!(
                " · page {}/{}",
                pagination.page, pagination.total_pages
            ));
        }
        header
    }

    fn render_empty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (_, plural) = self.data.kind.noun();
        if self.data.pagination.count == 0 {
            writeln!(f, "No {} found.", plural)
        } else {
            writeln!(f, "No {} on this page.", plural)
        }
    }
}

impl<'a> fmt::Display for CardListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for card in &self.data.cards {
                write!(f, "{}", CardView::new(card, self.mode))?;
            }
            return Ok(());
        }

        writeln!(f, "{}", self.header())?;
        if !self.data.filters.is_empty() && self.mode != ViewMode::Compact {
            writeln!(f, "Filters: {}", self.data.filters.join(", "))?;
        }
        writeln!(f)?;

        if self.data.cards.is_empty() {
            return self.render_empty(f);
        }

        for (i, card) in self.data.cards.iter().enumerate() {
            if i > 0 && self.mode != ViewMode::Compact {
                writeln!(f)?;
            }
            write!(f, "{}", CardView::new(card, self.mode))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_follower_list;
    use chrono::{TimeZone, Utc};
    use tiklens_engine::ListQuery;
    use tiklens_types::FollowerRecord;

    fn sample() -> CardListViewModel {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let followers = vec![
            FollowerRecord::new("alice", Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(), now)
                .with_mutual(true),
            FollowerRecord::new("bob", Utc.with_ymd_and_hms(2024, 1, 16, 14, 20, 0).unwrap(), now),
        ];
        present_follower_list(ListQuery::new().apply(&followers), Vec::new()).content
    }

    #[test]
    fn test_list_compact() {
        let list = sample();
        insta::assert_snapshot!(list.create_view(ViewMode::Compact).to_string(), @r"
        Followers · 2 followers

        [B] @bob  Followed: Jan 16, 2024
        [A] @alice  👥 Mutual  Followed: Jan 15, 2024
        ");
    }

    #[test]
    fn test_list_standard() {
        let list = sample();
        insta::assert_snapshot!(list.create_view(ViewMode::Standard).to_string(), @r"
        Followers · 2 followers

        [B] @bob
            Followed: Jan 16, 2024

        [A] @alice  👥 Mutual
            Followed: Jan 15, 2024
        ");
    }

    #[test]
    fn test_list_minimal_is_handles_only() {
        let list = sample();
        assert_eq!(list.create_view(ViewMode::Minimal).to_string(), "@bob\n@alice\n");
    }

    #[test]
    fn test_empty_list() {
        let list = present_follower_list(
            ListQuery::new().apply::<FollowerRecord>(&[]),
            vec!["search: zzz".to_string()],
        )
        .content;
        let text = list.create_view(ViewMode::Standard).to_string();
        assert!(text.contains("Filters: search: zzz"));
        assert!(text.ends_with("No followers found.\n"));
    }
}
