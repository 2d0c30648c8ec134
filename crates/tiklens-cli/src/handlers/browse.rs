use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use std::cell::RefCell;
use tiklens_engine::{ComparisonKind, compare};

use super::HandlerContext;
use super::compare::list_kind;
use crate::args::BrowseList;
use crate::presentation::BrowseRenderer;
use crate::presentation::formatters::profile_url;
use crate::presentation::presenters::{
    present_comparison_card, present_follower_card, present_following_card,
};
use crate::presentation::view_models::{
    CardListKind, RelationshipCard, RelationshipCardViewModel,
};

pub fn handle(ctx: &HandlerContext, list: BrowseList) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `followers list` or `compare` instead");
    }

    let imported = ctx.load_export()?;

    let (kind, views): (CardListKind, Vec<RelationshipCardViewModel>) = match list {
        BrowseList::Followers => (
            CardListKind::Followers,
            imported.followers.iter().map(present_follower_card).collect(),
        ),
        BrowseList::Following => (
            CardListKind::Following,
            imported.following.iter().map(present_following_card).collect(),
        ),
        BrowseList::Mutuals => comparison_views(&imported, ComparisonKind::Mutuals),
        BrowseList::FollowersOnly => comparison_views(&imported, ComparisonKind::FollowersOnly),
        BrowseList::FollowingOnly => comparison_views(&imported, ComparisonKind::FollowingOnly),
    };

    let opened = RefCell::new(Vec::new());
    let cards = attach_open_actions(views, &opened);

    BrowseRenderer::new(kind.title(), &cards).run()?;
    drop(cards);

    let opened = opened.into_inner();
    if !opened.is_empty() {
        println!("Opened profiles:");
        for link in opened {
            println!("  {}", link);
        }
    }
    Ok(())
}

fn comparison_views(
    imported: &tiklens_providers::ImportedRelationships,
    kind: ComparisonKind,
) -> (CardListKind, Vec<RelationshipCardViewModel>) {
    let views = compare(&imported.followers, &imported.following, kind)
        .iter()
        .map(present_comparison_card)
        .collect();
    (list_kind(kind), views)
}

/// Every card records its profile link when activated
fn attach_open_actions(
    views: Vec<RelationshipCardViewModel>,
    opened: &RefCell<Vec<String>>,
) -> Vec<RelationshipCard<'_>> {
    views
        .into_iter()
        .map(|view| {
            let link = profile_url(&view.username);
            RelationshipCard::new(view).with_action(move || opened.borrow_mut().push(link.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{CardInput, render_card};

    #[test]
    fn test_activation_records_profile_link() {
        let opened = RefCell::new(Vec::new());
        let cards = attach_open_actions(
            vec![render_card(CardInput::new("alice")), render_card(CardInput::new("bob"))],
            &opened,
        );

        cards[1].activate();
        cards[1].activate();
        cards[0].activate();
        drop(cards);

        assert_eq!(
            opened.into_inner(),
            vec![
                "https://www.tiktok.com/@bob",
                "https://www.tiktok.com/@bob",
                "https://www.tiktok.com/@alice",
            ]
        );
    }
}
