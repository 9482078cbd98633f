//! Sequential document opener CLI.
//!
//! Pick a word-processing document; every later document in the same folder
//! (sorted by file name) opens as the previous one is closed.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use docwalk::core::document;
use docwalk::exit_codes;
use docwalk::io::config::{WalkConfig, load_config};
use docwalk::io::interrupt;
use docwalk::io::launch::ShellLauncher;
use docwalk::io::watch::SysinfoTable;
use docwalk::logging;
use docwalk::resolve::{self, NothingToDo, Resolution};
use docwalk::walk::{self, WalkEvent, WalkSettings, WalkStop};

#[derive(Parser)]
#[command(
    name = "docwalk",
    version,
    about = "Open each later document in a folder as you close the previous one"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a starting document and open the rest of the folder in turn.
    Open {
        /// Starting document; the native file dialog opens when omitted.
        path: Option<PathBuf>,
        /// Configuration file (TOML); defaults apply when omitted.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the sorted document catalog without opening anything.
    List {
        /// A document, or a directory to enumerate.
        path: PathBuf,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Open { path, config } => cmd_open(path, config),
        Command::List { path } => cmd_list(&path),
    }
}

fn cmd_open(path: Option<PathBuf>, config: Option<PathBuf>) -> Result<i32> {
    let config = match config {
        Some(path) => load_config(&path)?,
        None => WalkConfig::default(),
    };

    println!("docwalk: open a folder's documents in sequence");
    println!("{}", "-".repeat(48));

    let setup = match resolve::resolve_start(path)? {
        Resolution::Done(reason) => {
            println!("{}", describe_nothing_to_do(&reason));
            return Ok(exit_codes::OK);
        }
        Resolution::Ready(setup) => setup,
    };

    let total = setup.catalog.len();
    println!(
        "Selected document {} of {} in {}",
        setup.start_index + 1,
        total,
        setup.directory.display()
    );
    println!();
    println!("These documents will open in turn:");
    for (offset, entry) in setup.catalog.entries()[setup.start_index..].iter().enumerate() {
        println!("{:>4}. {}", setup.start_index + offset + 1, file_name(entry));
    }
    println!();
    println!("Press Ctrl-C at any time to stop.");
    println!("{}", "-".repeat(48));

    interrupt::install_handler()?;

    let launcher = ShellLauncher::new(config.launch_grace());
    let mut table = SysinfoTable::new();
    let settings = WalkSettings {
        viewer_process: config.viewer_process_name().to_string(),
        poll_interval: config.poll_interval(),
    };

    let outcome = walk::run_walk(
        &setup.catalog,
        setup.start_index,
        &settings,
        &launcher,
        &mut table,
        &interrupt::interrupted,
        render_event,
    );

    println!();
    match outcome.stop {
        WalkStop::Completed => {
            println!("All remaining documents have been processed.");
            Ok(exit_codes::OK)
        }
        WalkStop::OpenFailed { path, error } => {
            println!("Failed to open {}: {error}", file_name(&path));
            println!("Stopping here; {} document(s) were opened.", outcome.opened);
            Ok(exit_codes::ABORTED)
        }
        WalkStop::Interrupted { .. } => {
            println!("Interrupted; stopping.");
            Ok(exit_codes::OK)
        }
    }
}

fn cmd_list(path: &Path) -> Result<i32> {
    let view = resolve::resolve_list(path)?;
    if view.catalog.is_empty() {
        println!("No documents found in {}.", view.directory.display());
        return Ok(exit_codes::OK);
    }

    println!(
        "{} document(s) in {}:",
        view.catalog.len(),
        view.directory.display()
    );
    for (index, entry) in view.catalog.entries().iter().enumerate() {
        let marker = if view.selected_index == Some(index) { "*" } else { " " };
        println!("{marker}{:>4}. {}", index + 1, file_name(entry));
    }
    if let Some(index) = view.selected_index {
        println!(
            "Selected: {} ({} of {})",
            file_name(&view.catalog.entries()[index]),
            index + 1,
            view.catalog.len()
        );
    }
    Ok(exit_codes::OK)
}

fn describe_nothing_to_do(reason: &NothingToDo) -> String {
    match reason {
        NothingToDo::Cancelled => "No file selected; nothing to do.".to_string(),
        NothingToDo::NotAFile(path) => {
            format!("{} is not an existing file; nothing to do.", path.display())
        }
        NothingToDo::Unsupported(path) => format!(
            "{} is not a supported document ({}); nothing to do.",
            path.display(),
            document::EXTENSIONS.map(|ext| format!(".{ext}")).join("/")
        ),
        NothingToDo::NoDocuments(dir) => {
            format!("No documents found in {}.", dir.display())
        }
    }
}

fn render_event(event: &WalkEvent<'_>) {
    match event {
        WalkEvent::Opening { position, total, path } => {
            println!();
            println!("Opening {position}/{total}: {}", file_name(path));
        }
        WalkEvent::Tracking { path, .. } => {
            println!("Now viewing {}", file_name(path));
            println!("Close it to open the next document...");
        }
        WalkEvent::Untracked { path } => {
            println!(
                "Could not track a viewer process for {}; continuing without waiting.",
                file_name(path)
            );
        }
    }
}

fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_open_without_path() {
        let cli = Cli::parse_from(["docwalk", "open"]);
        assert!(matches!(
            cli.command,
            Command::Open {
                path: None,
                config: None
            }
        ));
    }

    #[test]
    fn parse_open_with_path_and_config() {
        let cli = Cli::parse_from(["docwalk", "open", "report.docx", "--config", "walk.toml"]);
        match cli.command {
            Command::Open { path, config } => {
                assert_eq!(path, Some(PathBuf::from("report.docx")));
                assert_eq!(config, Some(PathBuf::from("walk.toml")));
            }
            Command::List { .. } => panic!("expected open"),
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::parse_from(["docwalk", "list", "docs"]);
        assert!(matches!(cli.command, Command::List { .. }));
    }

    #[test]
    fn unsupported_message_names_the_extensions() {
        let message =
            describe_nothing_to_do(&NothingToDo::Unsupported(PathBuf::from("notes.txt")));
        assert!(message.contains(".doc/.docx"));
    }
}
