//! # Presentation Layer
//!
//! Everything between the engine's results and the terminal, arranged as a
//! small MVVM stack:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!                                                   \-> [ BrowseRenderer ] (TUI)
//! ```
//!
//! * `view_models/` - serialisable data contracts. No logic. Whatever is here
//!   is what `--format json` prints.
//! * `presenters/` - pure functions from domain records to view models. The
//!   relationship card presenter lives in `presenters/card.rs`.
//! * `views/` - `fmt::Display` per [`ViewMode`], plus ratatui widgets in
//!   `views/tui/`.
//! * `renderers/` - console (text or JSON) and the interactive browser.
//! * `formatters/` - string helpers shared by views and presenters.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{BrowseRenderer, ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel, ViewMode};
