use anyhow::{Context as _, Result};
use tiklens_engine::ListQuery;
use tiklens_types::{DayBound, parse_date_bound};

use super::HandlerContext;
use crate::args::ListArgs;
use crate::presentation::presenters::{present_follower_list, present_following_list};

pub fn handle_followers(ctx: &HandlerContext, args: ListArgs) -> Result<()> {
    let imported = ctx.load_export()?;
    let (query, filters) = build_query(ctx, &args)?;

    let page = query.apply(&imported.followers);
    tracing::debug!(matched = page.count, page = page.page, "followers listed");

    ctx.render(present_follower_list(page, filters))
}

pub fn handle_following(ctx: &HandlerContext, args: ListArgs) -> Result<()> {
    let imported = ctx.load_export()?;
    let (query, filters) = build_query(ctx, &args)?;

    let page = query.apply(&imported.following);
    tracing::debug!(matched = page.count, page = page.page, "following listed");

    ctx.render(present_following_list(page, filters))
}

/// Turn CLI flags into a query plus a human summary of the active filters
fn build_query(ctx: &HandlerContext, args: &ListArgs) -> Result<(ListQuery, Vec<String>)> {
    let page_size = args.page.page_size.unwrap_or(ctx.config.page_size);
    let mut query = ListQuery::new()
        .with_order(args.order)
        .with_page(args.page.page, page_size);
    let mut filters = Vec::new();

    if let Some(search) = &args.search {
        query = query.with_search(search.clone());
        filters.push(format!("search: {}", search));
    }
    if let Some(raw) = &args.since {
        let since = parse_date_bound(raw, DayBound::Start)
            .with_context(|| format!("Invalid --since value '{}'", raw))?;
        query = query.with_since(since);
        filters.push(format!("since: {}", raw));
    }
    if let Some(raw) = &args.until {
        let until = parse_date_bound(raw, DayBound::End)
            .with_context(|| format!("Invalid --until value '{}'", raw))?;
        query = query.with_until(until);
        filters.push(format!("until: {}", raw));
    }
    if args.order != Default::default() {
        filters.push(format!("order: {}", args.order));
    }

    Ok((query, filters))
}
