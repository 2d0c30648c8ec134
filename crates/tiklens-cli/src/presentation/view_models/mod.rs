pub mod browse;
pub mod card;
pub mod check;
pub mod common;
pub mod config;
pub mod history;
pub mod lists;
pub mod result;
pub mod stats;

pub use browse::BrowseStatusViewModel;
pub use card::{BadgeIcon, CardAction, CardBadge, RelationshipCard, RelationshipCardViewModel};
pub use check::{CheckViewModel, EntryErrorViewModel, SectionCheckViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use history::{HistoryViewModel, NameChangeViewModel, PeriodViewModel, SnapshotViewModel};
pub use lists::{CardListKind, CardListViewModel, PaginationViewModel};
pub use result::CommandResultViewModel;
pub use stats::{GrowthViewModel, StatsViewModel, TopDayViewModel};

use std::fmt;

/// Bridge from a view model to its text view for a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
