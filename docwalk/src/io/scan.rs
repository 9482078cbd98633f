//! Non-recursive directory scan for supported documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::document;

/// Collect every supported document directly inside `dir`, unsorted.
///
/// Directories whose names happen to carry a document extension are skipped;
/// anything else the directory read yields (including symlinks to files)
/// passes through.
pub fn scan_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        if !document::is_supported(&path) {
            continue;
        }
        let file_type = entry
            .file_type()
            .with_context(|| format!("file type of {}", path.display()))?;
        if file_type.is_dir() {
            continue;
        }
        found.push(path);
    }
    debug!(dir = %dir.display(), count = found.len(), "scanned directory");
    Ok(found)
}
