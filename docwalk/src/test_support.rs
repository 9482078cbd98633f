//! Test-only scripted seams and filesystem fixtures.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::io::launch::Launcher;
use crate::io::watch::ProcessTable;

/// Launcher that records launched paths and fails on scripted call indices.
pub struct ScriptedLauncher {
    launched: RefCell<Vec<PathBuf>>,
    fail_on: Vec<usize>,
}

impl ScriptedLauncher {
    pub fn new() -> Self {
        Self {
            launched: RefCell::new(Vec::new()),
            fail_on: Vec::new(),
        }
    }

    /// Fail the calls at the given 0-based indices.
    pub fn failing_on(fail_on: &[usize]) -> Self {
        Self {
            launched: RefCell::new(Vec::new()),
            fail_on: fail_on.to_vec(),
        }
    }

    /// Paths passed to `launch`, in call order (failed calls included).
    pub fn launched(&self) -> Vec<PathBuf> {
        self.launched.borrow().clone()
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        let mut launched = self.launched.borrow_mut();
        let call = launched.len();
        launched.push(path.to_path_buf());
        if self.fail_on.contains(&call) {
            return Err(anyhow!("scripted open failure for {}", path.display()));
        }
        Ok(())
    }
}

/// Process table that replays scripted snapshots and liveness answers.
///
/// `matching_pids` pops the snapshot queue (empty when exhausted);
/// `is_running` pops the liveness queue (process gone when exhausted).
pub struct ScriptedTable {
    snapshots: VecDeque<Result<Vec<u32>, String>>,
    liveness: VecDeque<Result<bool, String>>,
}

impl ScriptedTable {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::new(),
            liveness: VecDeque::new(),
        }
    }

    pub fn push_snapshot(&mut self, pids: &[u32]) {
        self.snapshots.push_back(Ok(pids.to_vec()));
    }

    pub fn push_snapshot_err(&mut self, message: &str) {
        self.snapshots.push_back(Err(message.to_string()));
    }

    pub fn push_running(&mut self, alive: bool) {
        self.liveness.push_back(Ok(alive));
    }

    pub fn push_running_err(&mut self, message: &str) {
        self.liveness.push_back(Err(message.to_string()));
    }

    /// Liveness answers not yet consumed.
    pub fn remaining_liveness(&self) -> usize {
        self.liveness.len()
    }
}

impl ProcessTable for ScriptedTable {
    fn matching_pids(&mut self, _needle: &str) -> Result<Vec<u32>> {
        match self.snapshots.pop_front() {
            Some(Ok(pids)) => Ok(pids),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(Vec::new()),
        }
    }

    fn is_running(&mut self, _pid: u32) -> Result<bool> {
        match self.liveness.pop_front() {
            Some(Ok(alive)) => Ok(alive),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(false),
        }
    }
}

/// Temp directory pre-populated with named files.
pub struct DocsDir {
    temp: tempfile::TempDir,
}

impl DocsDir {
    pub fn with_files(names: &[&str]) -> Result<Self> {
        let temp = tempfile::tempdir()?;
        for name in names {
            fs::write(temp.path().join(name), b"")?;
        }
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }
}
