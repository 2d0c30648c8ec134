use clap::ValueEnum;
use std::fmt;

use crate::presentation::ViewMode;
use tiklens_engine::HistoryPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewModeArg {
    Minimal,
    Compact,
    Standard,
    Verbose,
}

impl From<ViewModeArg> for ViewMode {
    fn from(mode: ViewModeArg) -> Self {
        match mode {
            ViewModeArg::Minimal => ViewMode::Minimal,
            ViewModeArg::Compact => ViewMode::Compact,
            ViewModeArg::Standard => ViewMode::Standard,
            ViewModeArg::Verbose => ViewMode::Verbose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum HistoryPeriodArg {
    Week,
    Month,
    Year,
    All,
}

impl From<HistoryPeriodArg> for HistoryPeriod {
    fn from(period: HistoryPeriodArg) -> Self {
        match period {
            HistoryPeriodArg::Week => HistoryPeriod::Week,
            HistoryPeriodArg::Month => HistoryPeriod::Month,
            HistoryPeriodArg::Year => HistoryPeriod::Year,
            HistoryPeriodArg::All => HistoryPeriod::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum BrowseList {
    Followers,
    Following,
    Mutuals,
    FollowersOnly,
    FollowingOnly,
}
