pub mod card;
pub mod check;
pub mod config;
pub mod history;
pub mod lists;
pub mod stats;
pub mod tui;

pub use card::CardView;
