use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }

    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(
                out,
                "{} {}",
                badge.icon(),
                badge.label.if_supports_color(Stream::Stdout, |t| t.bold())
            )?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() && self.mode != ViewMode::Minimal {
            writeln!(
                out,
                "\n{}",
                "💡 Tips:".if_supports_color(Stream::Stdout, |t| t.yellow())
            )?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", cmd.if_supports_color(Stream::Stdout, |t| t.cyan()))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)
    }
}
