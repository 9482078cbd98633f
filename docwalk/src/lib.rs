//! Sequential document opener.
//!
//! Pick a word-processing document and every later document in the same
//! folder (sorted by file name) opens automatically as the previous one is
//! closed. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (document kinds, catalog order,
//!   viewer identity). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (directory scan, file dialog,
//!   open commands, process table, interrupts). Isolated behind seams so
//!   tests never spawn real viewers.
//!
//! Orchestration modules ([`resolve`], [`walk`]) coordinate core logic with
//! I/O to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod resolve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod walk;
