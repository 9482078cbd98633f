//! Recognition of supported word-processor documents.

use std::path::Path;

/// The two recognized document extensions, lowercase, as offered in the
/// file-dialog filter.
pub const EXTENSIONS: [&str; 2] = ["doc", "docx"];

/// Whether `path` carries a supported document extension.
///
/// Matching is ASCII case-insensitive; a path without an extension is never
/// supported.
pub fn is_supported(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}
