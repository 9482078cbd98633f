//! Native file-open dialog for choosing the starting document.

use std::path::PathBuf;

use rfd::FileDialog;
use tracing::debug;

use crate::core::document;

/// Show the native open dialog, filtered to supported documents with an
/// all-files fallback. `None` when the user cancels.
pub fn pick_document() -> Option<PathBuf> {
    debug!("opening native file dialog");
    FileDialog::new()
        .set_title("Choose a document")
        .add_filter("Word documents", &document::EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}
