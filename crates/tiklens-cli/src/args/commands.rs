use super::common::{ListArgs, PageArgs};
use super::enums::{BrowseList, HistoryPeriodArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Accounts that follow you")]
    Followers {
        #[command(subcommand)]
        command: FollowersCommand,
    },

    #[command(about = "Accounts you follow")]
    Following {
        #[command(subcommand)]
        command: FollowingCommand,
    },

    #[command(about = "Compare your followers with the accounts you follow")]
    Compare {
        #[command(subcommand)]
        command: CompareCommand,
    },

    #[command(about = "Relationship statistics and recent growth")]
    Stats {
        #[arg(long, help = "Reference time for growth windows (RFC 3339, default: now)")]
        now: Option<String>,
    },

    #[command(about = "Track changes across several exports")]
    History {
        #[arg(required = true, help = "Export files or directories of exports")]
        paths: Vec<PathBuf>,

        #[arg(long, default_value = "all", help = "Only exports dated within this window")]
        period: HistoryPeriodArg,

        #[arg(long, help = "End of the window (RFC 3339, default: now)")]
        now: Option<String>,
    },

    #[command(about = "Validate an export and report unreadable entries")]
    Check {
        #[arg(help = "Export to check (defaults to the configured export)")]
        path: Option<PathBuf>,
    },

    #[command(about = "Browse relationship cards interactively")]
    Browse {
        #[arg(default_value = "followers")]
        list: BrowseList,
    },

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum FollowersCommand {
    #[command(about = "List followers as cards")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

#[derive(Subcommand)]
pub enum FollowingCommand {
    #[command(about = "List followed accounts as cards")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

#[derive(Subcommand)]
pub enum CompareCommand {
    #[command(about = "Accounts that follow each other with you")]
    Mutuals {
        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Followers you don't follow back")]
    FollowersOnly {
        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Accounts you follow that don't follow you back")]
    FollowingOnly {
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    /// The global `--export` and `--mode` flags set the default export and
    /// view mode.
    #[command(about = "Update configuration values (also takes --export and --mode)")]
    Set {
        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long)]
        comparison_page_size: Option<usize>,
    },
}
