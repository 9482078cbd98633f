//! Ordered catalog of the documents in one directory.

use std::path::{Path, PathBuf};

/// The documents of one directory, sorted by base file name.
///
/// Paths are stored as handed in; callers pass absolute paths so that
/// position lookups reduce to plain equality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PathBuf>,
}

impl Catalog {
    /// Build a catalog from scanned paths, sorting by base file name (byte
    /// order, extension included).
    pub fn new(mut paths: Vec<PathBuf>) -> Self {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Self { entries: paths }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of `selected` by exact path equality.
    pub fn position_of(&self, selected: &Path) -> Option<usize> {
        self.entries.iter().position(|entry| entry.as_path() == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| PathBuf::from(format!("/docs/{name}")))
            .collect()
    }

    #[test]
    fn sorts_by_file_name_across_extensions() {
        let catalog = Catalog::new(paths(&["c.docx", "a.docx", "b.doc"]));
        let names: Vec<_> = catalog
            .entries()
            .iter()
            .filter_map(|path| path.file_name())
            .collect();
        assert_eq!(
            names,
            [OsStr::new("a.docx"), OsStr::new("b.doc"), OsStr::new("c.docx")]
        );
    }

    #[test]
    fn position_of_finds_exact_match() {
        let catalog = Catalog::new(paths(&["a.docx", "b.doc", "c.docx"]));
        assert_eq!(catalog.position_of(Path::new("/docs/b.doc")), Some(1));
    }

    #[test]
    fn position_of_rejects_absent_path() {
        let catalog = Catalog::new(paths(&["a.docx"]));
        assert_eq!(catalog.position_of(Path::new("/docs/zz.doc")), None);
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
