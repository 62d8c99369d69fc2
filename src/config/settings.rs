use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::SshPaths;
use crate::{KeysyncError, Result};

/// Global settings for ssh-keysync
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory for private key files (None = ~/.ssh)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_dir: Option<PathBuf>,

    /// SSH client config file (None = <ssh_dir>/config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,

    /// Default subscription list used by `resync`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<PathBuf>,
}

impl Settings {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ssh-keysync").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load settings from the default config file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| KeysyncError::Config("Cannot determine config directory".to_string()))?;
        Self::load_from(&path)
    }

    /// Load settings from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            KeysyncError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(settings)
    }

    /// Resolve the SSH paths, applying overrides on top of `~/.ssh`
    pub fn ssh_paths(&self) -> Result<SshPaths> {
        let base = match &self.ssh_dir {
            Some(dir) => SshPaths::in_dir(dir),
            None => SshPaths::from_home()?,
        };

        Ok(match &self.config_file {
            Some(file) => SshPaths::new(base.ssh_dir(), file),
            None => base,
        })
    }
}
