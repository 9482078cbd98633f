//! Sequential walk over the document catalog.
//!
//! Each file moves through not-opened, waiting-for-launch, tracking, and
//! closed, with an early exit to closed when no new viewer process shows up
//! after the launch grace period. One file is fully processed before the
//! next begins; the only blocking operations are the grace period inside the
//! launcher and the poll loop here.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::catalog::Catalog;
use crate::io::launch::Launcher;
use crate::io::watch::ProcessTable;

/// Tunables for one walk, resolved from configuration.
#[derive(Debug, Clone)]
pub struct WalkSettings {
    /// Viewer process name to match in the process table.
    pub viewer_process: String,
    /// Poll period while waiting for the tracked process to exit.
    pub poll_interval: Duration,
}

/// Progress notifications rendered by the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    /// A document is about to be opened. `position` is 1-based within the
    /// whole catalog.
    Opening {
        position: usize,
        total: usize,
        path: &'a Path,
    },
    /// A new viewer process was found and will be waited on.
    Tracking { pid: u32, path: &'a Path },
    /// No new viewer process appeared; the walk moves on without waiting.
    Untracked { path: &'a Path },
}

/// Reason why the walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStop {
    /// Every document from the start position was processed.
    Completed,
    /// The open command failed; the remaining documents were abandoned.
    OpenFailed { path: PathBuf, error: String },
    /// An interrupt arrived while waiting on a viewer process.
    Interrupted { path: PathBuf },
}

/// Summary of one walk invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Documents successfully handed to the OS opener.
    pub opened: usize,
    pub stop: WalkStop,
}

enum WaitOutcome {
    Closed,
    Abandoned,
    Interrupted,
}

/// Open every document from `start_index` to the end of the catalog, waiting
/// between documents for the tracked viewer process to exit.
///
/// Process-table failures are non-fatal (logged, the walk continues); an
/// open-command failure abandons the remaining documents.
pub fn run_walk<L: Launcher, T: ProcessTable, F: FnMut(&WalkEvent<'_>)>(
    catalog: &Catalog,
    start_index: usize,
    settings: &WalkSettings,
    launcher: &L,
    table: &mut T,
    interrupted: &dyn Fn() -> bool,
    mut on_event: F,
) -> WalkOutcome {
    let total = catalog.len();
    let mut opened = 0usize;

    for (index, path) in catalog.entries().iter().enumerate().skip(start_index) {
        let path = path.as_path();
        on_event(&WalkEvent::Opening {
            position: index + 1,
            total,
            path,
        });

        let before = snapshot(table, &settings.viewer_process);

        if let Err(err) = launcher.launch(path) {
            warn!(path = %path.display(), err = %err, "open command failed");
            return WalkOutcome {
                opened,
                stop: WalkStop::OpenFailed {
                    path: path.to_path_buf(),
                    error: format!("{err:#}"),
                },
            };
        }
        opened += 1;

        let tracked = match table.matching_pids(&settings.viewer_process) {
            Ok(pids) => pids.into_iter().find(|pid| !before.contains(pid)),
            Err(err) => {
                warn!(err = %err, "process re-scan failed; not waiting");
                None
            }
        };

        let Some(pid) = tracked else {
            debug!(path = %path.display(), "no new viewer process detected");
            on_event(&WalkEvent::Untracked { path });
            continue;
        };

        info!(pid, path = %path.display(), "tracking viewer process");
        on_event(&WalkEvent::Tracking { pid, path });

        match wait_for_exit(table, pid, settings.poll_interval, interrupted) {
            WaitOutcome::Closed => debug!(pid, "viewer process exited"),
            WaitOutcome::Abandoned => {}
            WaitOutcome::Interrupted => {
                return WalkOutcome {
                    opened,
                    stop: WalkStop::Interrupted {
                        path: path.to_path_buf(),
                    },
                };
            }
        }
    }

    WalkOutcome {
        opened,
        stop: WalkStop::Completed,
    }
}

fn snapshot<T: ProcessTable>(table: &mut T, viewer_process: &str) -> HashSet<u32> {
    match table.matching_pids(viewer_process) {
        Ok(pids) => pids.into_iter().collect(),
        Err(err) => {
            warn!(err = %err, "process snapshot failed; assuming none");
            HashSet::new()
        }
    }
}

/// Poll until `pid` leaves the process table.
///
/// The interrupt flag is checked before each liveness query; table errors
/// abandon the wait so the walk can continue with the next document.
fn wait_for_exit<T: ProcessTable>(
    table: &mut T,
    pid: u32,
    poll_interval: Duration,
    interrupted: &dyn Fn() -> bool,
) -> WaitOutcome {
    loop {
        if interrupted() {
            return WaitOutcome::Interrupted;
        }
        match table.is_running(pid) {
            Ok(false) => return WaitOutcome::Closed,
            Ok(true) => {}
            Err(err) => {
                warn!(pid, err = %err, "liveness check failed; abandoning wait");
                return WaitOutcome::Abandoned;
            }
        }
        thread::sleep(poll_interval);
    }
}
