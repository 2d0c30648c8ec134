//! TestWorld pattern for isolated CLI runs.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::ExportBuilder;

/// Isolated environment: a temp root with a `.tiklens` data directory and a
/// directory for export files.
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    exports_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".tiklens");
        let exports_dir = temp_dir.path().join("exports");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&exports_dir).expect("Failed to create exports dir");

        Self {
            temp_dir,
            data_dir,
            exports_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn exports_dir(&self) -> &Path {
        &self.exports_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an export under `exports/` and return its path
    pub fn write_export(&self, file_name: &str, export: &ExportBuilder) -> Result<PathBuf> {
        export.write_to(&self.exports_dir, file_name)
    }

    /// Point a command at this world's data directory and silence logging
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .current_dir(self.temp_dir.path())
            .env_remove("TIKLENS_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}
