use anyhow::Result;
use tiklens_engine::{ComparisonKind, Page, compare};

use super::HandlerContext;
use crate::args::PageArgs;
use crate::presentation::presenters::present_comparison_list;
use crate::presentation::view_models::CardListKind;

pub fn handle(ctx: &HandlerContext, kind: ComparisonKind, page: PageArgs) -> Result<()> {
    let imported = ctx.load_export()?;

    let records = compare(&imported.followers, &imported.following, kind);
    tracing::debug!(kind = kind.label(), count = records.len(), "comparison computed");

    let page_size = page.page_size.unwrap_or(ctx.config.comparison_page_size);
    let page = Page::paginate(records, page.page, page_size);

    ctx.render(present_comparison_list(list_kind(kind), page))
}

pub(crate) fn list_kind(kind: ComparisonKind) -> CardListKind {
    match kind {
        ComparisonKind::Mutuals => CardListKind::Mutuals,
        ComparisonKind::FollowersOnly => CardListKind::FollowersOnly,
        ComparisonKind::FollowingOnly => CardListKind::FollowingOnly,
    }
}
