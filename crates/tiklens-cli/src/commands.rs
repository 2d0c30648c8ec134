use super::args::{
    Cli, Commands, CompareCommand, ConfigCommand, FollowersCommand, FollowingCommand,
};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging;
use crate::presentation::ViewMode;
use crate::presentation::view_models::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use tiklens_engine::ComparisonKind;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    owo_colors::set_override(colors_enabled());

    let data_dir = expand_tilde(&cli.data_dir);
    let config_path = Config::path_in(&data_dir);
    tracing::debug!(path = %config_path.display(), "loading config");
    let config = Config::load_from(&config_path)?;

    let format: OutputFormat = cli.format.into();
    let mode: Option<ViewMode> = cli.mode.map(Into::into);

    let Some(command) = cli.command else {
        show_guidance(&config);
        return Ok(());
    };

    let ctx = HandlerContext::new(format, mode, data_dir, config, cli.export.clone());

    match command {
        Commands::Followers { command } => match command {
            FollowersCommand::List { args } => handlers::relationships::handle_followers(&ctx, args),
        },

        Commands::Following { command } => match command {
            FollowingCommand::List { args } => handlers::relationships::handle_following(&ctx, args),
        },

        Commands::Compare { command } => match command {
            CompareCommand::Mutuals { page } => {
                handlers::compare::handle(&ctx, ComparisonKind::Mutuals, page)
            }
            CompareCommand::FollowersOnly { page } => {
                handlers::compare::handle(&ctx, ComparisonKind::FollowersOnly, page)
            }
            CompareCommand::FollowingOnly { page } => {
                handlers::compare::handle(&ctx, ComparisonKind::FollowingOnly, page)
            }
        },

        Commands::Stats { now } => handlers::stats::handle(&ctx, now),

        Commands::History { paths, period, now } => {
            handlers::history::handle(&ctx, paths, period.into(), now)
        }

        Commands::Check { path } => handlers::check::handle(&ctx, path),

        Commands::Browse { list } => handlers::browse::handle(&ctx, list),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
            ConfigCommand::Set {
                page_size,
                comparison_page_size,
            } => handlers::config::handle_set(
                &ctx,
                handlers::config::ConfigUpdate {
                    export: cli.export,
                    page_size,
                    comparison_page_size,
                    mode,
                },
            ),
        },
    }
}

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn show_guidance(config: &Config) {
    println!("tiklens - browse and analyze TikTok follower exports\n");

    match config.export_path.as_deref() {
        None => {
            println!("Get started:");
            println!("  tiklens config set --export <PATH>   # point at your user_data.json");
            println!("  tiklens check                        # validate it\n");
        }
        Some(path) => {
            println!("Export: {}\n", display_path(path));
            println!("Quick commands:");
            println!("  tiklens followers list               # follower cards");
            println!("  tiklens compare following-only       # who doesn't follow back");
            println!("  tiklens stats                        # totals and growth");
            println!("  tiklens browse                       # interactive browser\n");
        }
    }

    println!("For more commands:");
    println!("  tiklens --help");
}

fn display_path(path: &Path) -> String {
    match dirs::home_dir() {
        Some(home) => match path.strip_prefix(&home) {
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => path.display().to_string(),
        },
        None => path.display().to_string(),
    }
}
