//! Process-table observation behind the [`ProcessTable`] seam.

use anyhow::Result;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::debug;

/// Abstraction over the OS process table.
///
/// The production implementation wraps `sysinfo`; tests use scripted tables
/// that replay predetermined snapshots.
pub trait ProcessTable {
    /// Pids whose process name contains `needle`, ASCII case-insensitive,
    /// sorted ascending.
    fn matching_pids(&mut self, needle: &str) -> Result<Vec<u32>>;

    /// Whether `pid` is still present in the process table.
    fn is_running(&mut self, pid: u32) -> Result<bool>;
}

/// Process table backed by `sysinfo`.
pub struct SysinfoTable {
    system: System,
}

impl SysinfoTable {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for SysinfoTable {
    fn matching_pids(&mut self, needle: &str) -> Result<Vec<u32>> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        let needle = needle.to_ascii_lowercase();
        let mut pids: Vec<u32> = self
            .system
            .processes()
            .iter()
            .filter(|(_, process)| {
                process
                    .name()
                    .to_string_lossy()
                    .to_ascii_lowercase()
                    .contains(&needle)
            })
            .map(|(pid, _)| pid.as_u32())
            .collect();
        // Ascending order keeps the snapshot diff deterministic.
        pids.sort_unstable();
        debug!(needle = %needle, count = pids.len(), "matched viewer processes");
        Ok(pids)
    }

    fn is_running(&mut self, pid: u32) -> Result<bool> {
        let pid = Pid::from_u32(pid);
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        Ok(self.system.process(pid).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysinfo_table_sees_this_process() {
        let mut table = SysinfoTable::new();
        assert!(table.is_running(std::process::id()).expect("liveness"));
    }

    #[test]
    fn sysinfo_table_matches_nothing_for_untypical_name() {
        let mut table = SysinfoTable::new();
        let pids = table
            .matching_pids("no-such-process-name-zzz")
            .expect("scan");
        assert!(pids.is_empty());
    }
}
