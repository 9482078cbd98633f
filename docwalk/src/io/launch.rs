//! Platform open commands behind the [`Launcher`] seam.

use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};
use wait_timeout::ChildExt;

/// Abstraction over the OS default-open mechanism.
///
/// The production implementation shells out to the platform open command;
/// tests use scripted launchers that never spawn processes.
pub trait Launcher {
    /// Open `path` with the OS default handler and let the launch grace
    /// period elapse. An error means the open command itself failed.
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Launcher that invokes the platform open command, detached from its
/// stdio.
pub struct ShellLauncher {
    grace: Duration,
}

impl ShellLauncher {
    pub fn new(grace: Duration) -> Self {
        Self { grace }
    }
}

impl Launcher for ShellLauncher {
    #[instrument(skip_all, fields(path = %path.display(), grace_secs = self.grace.as_secs()))]
    fn launch(&self, path: &Path) -> Result<()> {
        let started = Instant::now();

        let mut cmd = open_command(path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!("spawning open command");
        let mut child = cmd
            .spawn()
            .with_context(|| format!("open {}", path.display()))?;

        // The grace period doubles as a failure window: a handler that exits
        // nonzero before it elapses counts as a failed open.
        match child
            .wait_timeout(self.grace)
            .context("wait for open command")?
        {
            Some(status) if !status.success() => Err(anyhow!(
                "open command exited with status {:?} for {}",
                status.code(),
                path.display()
            )),
            Some(_) => {
                let remaining = self.grace.saturating_sub(started.elapsed());
                if !remaining.is_zero() {
                    thread::sleep(remaining);
                }
                Ok(())
            }
            None => {
                debug!("open command still running after grace period");
                Ok(())
            }
        }
    }
}

/// The platform default-open command, chosen by a compile-time check.
fn open_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg("").arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
