//! Walk configuration loaded from an optional TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::viewer;

/// Walk configuration (TOML).
///
/// The file is intended to be edited by humans and must remain stable.
/// Missing fields default to sensible values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalkConfig {
    /// Seconds to wait after the open command before the process table is
    /// re-scanned for the new viewer process.
    pub launch_grace_secs: u64,

    /// Poll period in milliseconds while waiting for the tracked viewer
    /// process to exit.
    pub poll_interval_ms: u64,

    /// Override of the platform viewer process name.
    pub viewer_process: Option<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            launch_grace_secs: 2,
            poll_interval_ms: 500,
            viewer_process: None,
        }
    }
}

impl WalkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.launch_grace_secs == 0 {
            return Err(anyhow!("launch_grace_secs must be > 0"));
        }
        if self.poll_interval_ms == 0 {
            return Err(anyhow!("poll_interval_ms must be > 0"));
        }
        if let Some(name) = &self.viewer_process
            && name.trim().is_empty()
        {
            return Err(anyhow!("viewer_process must not be blank"));
        }
        Ok(())
    }

    pub fn launch_grace(&self) -> Duration {
        Duration::from_secs(self.launch_grace_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Configured viewer process name, or the platform default.
    pub fn viewer_process_name(&self) -> &str {
        match &self.viewer_process {
            Some(name) => name.as_str(),
            None => viewer::default_process_name(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `WalkConfig::default()`.
pub fn load_config(path: &Path) -> Result<WalkConfig> {
    if !path.exists() {
        let cfg = WalkConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WalkConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &WalkConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
