//! Platform viewer process identity.

/// Process name of the expected document viewer.
///
/// A plain compile-time platform check, not OS-family detection: Word on
/// Windows and macOS, LibreOffice otherwise.
pub fn default_process_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "WINWORD.EXE"
    } else if cfg!(target_os = "macos") {
        "Microsoft Word"
    } else {
        "soffice.bin"
    }
}
