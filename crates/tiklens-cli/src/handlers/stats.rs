use anyhow::{Context as _, Result};
use chrono::Utc;
use tiklens_engine::relationship_stats;
use tiklens_types::parse_timestamp;

use super::HandlerContext;
use crate::presentation::presenters::present_stats;

pub fn handle(ctx: &HandlerContext, now: Option<String>) -> Result<()> {
    let now = match now {
        Some(raw) => {
            parse_timestamp(&raw).with_context(|| format!("Invalid --now value '{}'", raw))?
        }
        None => Utc::now(),
    };

    let imported = ctx.load_export()?;
    let stats = relationship_stats(&imported.followers, &imported.following, now);

    ctx.render(present_stats(stats, now))
}
