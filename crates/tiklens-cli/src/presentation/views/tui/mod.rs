//! Ratatui widgets for the card browser.
//!
//! Each widget borrows its view model and only maps it onto the buffer.

pub mod card_detail;
pub mod card_list;
pub mod status_bar;

pub use card_detail::CardDetailView;
pub use card_list::CardListView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}
