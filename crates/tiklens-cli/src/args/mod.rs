mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tiklens")]
#[command(about = "Browse and analyze TikTok follower exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.tiklens", global = true)]
    pub data_dir: String,

    #[arg(long, global = true, help = "TikTok export JSON (overrides the configured one)")]
    pub export: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Text density for plain output")]
    pub mode: Option<ViewModeArg>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
