//! Persist a MemorySession to disk as JSON so a session can span CLI invocations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::MemorySession;

/// Serializable snapshot of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default = "default_version")]
    pub version: u8,
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

fn default_version() -> u8 {
    1
}

impl MemorySession {
    /// Default session file: `~/.local/state/stashed-redirects/session.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("stashed-redirects")?;
        Ok(xdg_dirs.get_state_home().join("session.json"))
    }

    pub fn to_snapshot(&self) -> PersistedSession {
        PersistedSession {
            version: 1,
            entries: self.entries.clone(),
        }
    }

    pub fn from_snapshot(snapshot: PersistedSession) -> Self {
        Self {
            entries: snapshot.entries,
        }
    }

    /// Save to the given path (creates parent dir if needed).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.to_snapshot()).context("serialize session")?;
        std::fs::write(path, json).with_context(|| format!("write session: {}", path.display()))?;
        Ok(())
    }

    /// Load from the given path. A missing file is an empty session.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e).with_context(|| format!("read session: {}", path.display())),
        };
        let snapshot: PersistedSession = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse session: {}", path.display()))?;
        Ok(Self::from_snapshot(snapshot))
    }
}
