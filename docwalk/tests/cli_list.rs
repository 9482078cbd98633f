//! CLI tests for `docwalk list` and the pre-walk validation of `docwalk open`.
//!
//! Spawns the compiled binary and checks output plus exit codes. The walk
//! itself is never exercised here: every `open` invocation uses a selection
//! that terminates the run before any open command is issued.

use std::ffi::OsStr;
use std::process::{Command, Output};

use docwalk::exit_codes;
use docwalk::test_support::DocsDir;

fn run<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_docwalk"))
        .args(args)
        .output()
        .expect("run docwalk")
}

#[test]
fn list_prints_catalog_sorted_by_file_name() {
    let docs = DocsDir::with_files(&["c.docx", "a.docx", "b.doc", "notes.txt"]).expect("fixture");
    let output = run([OsStr::new("list"), docs.root().as_os_str()]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 document(s)"));
    let a = stdout.find("a.docx").expect("a.docx listed");
    let b = stdout.find("b.doc").expect("b.doc listed");
    let c = stdout.find("c.docx").expect("c.docx listed");
    assert!(a < b && b < c);
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn list_marks_the_selected_document_position() {
    let docs = DocsDir::with_files(&["a.docx", "b.doc", "c.docx"]).expect("fixture");
    let selected = docs.path_of("b.doc");
    let output = run([OsStr::new("list"), selected.as_os_str()]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Selected: b.doc (2 of 3)"));
}

#[test]
fn list_reports_empty_directory_normally() {
    let docs = DocsDir::with_files(&["notes.txt"]).expect("fixture");
    let output = run([OsStr::new("list"), docs.root().as_os_str()]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No documents found"));
}

#[test]
fn list_fails_for_missing_path() {
    let docs = DocsDir::with_files(&[]).expect("fixture");
    let missing = docs.root().join("gone");
    let output = run([OsStr::new("list"), missing.as_os_str()]);

    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
}

#[test]
fn open_terminates_normally_for_unsupported_selection() {
    let docs = DocsDir::with_files(&["notes.txt"]).expect("fixture");
    let selected = docs.path_of("notes.txt");
    let output = run([OsStr::new("open"), selected.as_os_str()]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("not a supported document"));
}

#[test]
fn open_terminates_normally_for_missing_selection() {
    let docs = DocsDir::with_files(&[]).expect("fixture");
    let missing = docs.root().join("gone.docx");
    let output = run([OsStr::new("open"), missing.as_os_str()]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("not an existing file"));
}
