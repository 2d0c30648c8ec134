// tiklens reads a TikTok "download your data" export on every run.
//
// Nothing is cached or stored besides config.toml: the export is the single
// source of truth, so a newer export is picked up just by pointing at it.
// Entries that fail to parse are reported by `check` rather than aborting a
// whole command.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    BrowseList, Cli, Commands, CompareCommand, ConfigCommand, FollowersCommand, FollowingCommand,
    HistoryPeriodArg, ListArgs, LogLevel, OutputFormat, PageArgs, ViewModeArg,
};
pub use commands::run;
