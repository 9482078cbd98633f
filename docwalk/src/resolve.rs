//! Resolve the starting selection into a walkable catalog.
//!
//! Turning a selection (CLI argument or dialog) into a walk setup has
//! several terminate-normally outcomes; they are modeled as data so the CLI
//! layer owns all user-facing wording.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::document;
use crate::io::pick;
use crate::io::scan::scan_documents;

/// Outcome of resolving the starting selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A walk can begin.
    Ready(WalkSetup),
    /// The run ends normally before anything is opened.
    Done(NothingToDo),
}

/// Everything the walk needs: the catalog and the starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkSetup {
    pub directory: PathBuf,
    pub catalog: Catalog,
    pub start_index: usize,
}

/// Normal-termination outcomes that precede any open attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NothingToDo {
    /// The dialog was dismissed without a selection.
    Cancelled,
    /// The selection does not exist or is not a regular file.
    NotAFile(PathBuf),
    /// The selection is not a supported document.
    Unsupported(PathBuf),
    /// The directory holds no supported documents.
    NoDocuments(PathBuf),
}

/// Resolve `selection`, falling back to the native dialog, into a walk
/// setup over the selection's directory.
pub fn resolve_start(selection: Option<PathBuf>) -> Result<Resolution> {
    let selected = match selection.or_else(pick::pick_document) {
        Some(path) => path,
        None => return Ok(Resolution::Done(NothingToDo::Cancelled)),
    };
    let selected = std::path::absolute(&selected)
        .with_context(|| format!("make {} absolute", selected.display()))?;
    debug!(selected = %selected.display(), "resolved selection");

    if !selected.is_file() {
        return Ok(Resolution::Done(NothingToDo::NotAFile(selected)));
    }
    if !document::is_supported(&selected) {
        return Ok(Resolution::Done(NothingToDo::Unsupported(selected)));
    }

    let directory = selected
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", selected.display()))?
        .to_path_buf();

    let catalog = Catalog::new(scan_documents(&directory)?);
    if catalog.is_empty() {
        return Ok(Resolution::Done(NothingToDo::NoDocuments(directory)));
    }

    let start_index = locate_start(&catalog, &selected)?;
    Ok(Resolution::Ready(WalkSetup {
        directory,
        catalog,
        start_index,
    }))
}

/// Index of the selected file in its own catalog.
///
/// Lookup failure is a hard error: nothing may be opened when the selection
/// cannot be placed in the recomputed list.
fn locate_start(catalog: &Catalog, selected: &Path) -> Result<usize> {
    catalog.position_of(selected).ok_or_else(|| {
        anyhow!(
            "selected file {} is not in its directory catalog",
            selected.display()
        )
    })
}

/// Catalog view for `docwalk list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub directory: PathBuf,
    pub catalog: Catalog,
    /// Present when the listed path is a file found in the catalog.
    pub selected_index: Option<usize>,
}

/// Enumerate the catalog for a directory, or for a file's parent directory.
pub fn resolve_list(path: &Path) -> Result<ListView> {
    let path = std::path::absolute(path)
        .with_context(|| format!("make {} absolute", path.display()))?;
    let (directory, selected) = if path.is_dir() {
        (path, None)
    } else if path.is_file() {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow!("{} has no parent directory", path.display()))?
            .to_path_buf();
        (parent, Some(path))
    } else {
        return Err(anyhow!("{} does not exist", path.display()));
    };

    let catalog = Catalog::new(scan_documents(&directory)?);
    let selected_index = selected.as_deref().and_then(|file| catalog.position_of(file));
    Ok(ListView {
        directory,
        catalog,
        selected_index,
    })
}
