use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{Error, Result};

/// Expand a mix of files and directories into export files.
///
/// Directories contribute their direct `*.json` children; files are taken
/// as given. The result is de-duplicated and sorted by path.
pub fn discover_exports(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();

    for input in inputs {
        if !input.exists() {
            return Err(Error::NotFound(input.clone()));
        }

        if input.is_file() {
            found.insert(input.clone());
            continue;
        }

        for entry in WalkDir::new(input).min_depth(1).max_depth(1) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_json(path) {
                found.insert(path.to_path_buf());
            }
        }
    }

    tracing::debug!(count = found.len(), "export files discovered");
    Ok(found.into_iter().collect())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
