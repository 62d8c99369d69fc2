use std::path::{Path, PathBuf};

use crate::{KeysyncError, Result};

/// Filesystem locations managed by the reconciler.
///
/// Resolved once and passed to every component, so tests can point the
/// whole pipeline at a temporary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshPaths {
    /// Directory holding one private key file per alias
    ssh_dir: PathBuf,
    /// Shared OpenSSH client configuration file
    config_file: PathBuf,
}

impl SshPaths {
    pub fn new(ssh_dir: impl Into<PathBuf>, config_file: impl Into<PathBuf>) -> Self {
        Self {
            ssh_dir: ssh_dir.into(),
            config_file: config_file.into(),
        }
    }

    /// `<ssh_dir>/config` inside the given directory.
    pub fn in_dir(ssh_dir: impl Into<PathBuf>) -> Self {
        let ssh_dir = ssh_dir.into();
        let config_file = ssh_dir.join("config");
        Self {
            ssh_dir,
            config_file,
        }
    }

    /// `~/.ssh` and `~/.ssh/config` for the current user.
    pub fn from_home() -> Result<Self> {
        let home = home_dir().ok_or_else(|| {
            KeysyncError::Config("Cannot determine home directory".to_string())
        })?;
        Ok(Self::in_dir(home.join(".ssh")))
    }

    pub fn ssh_dir(&self) -> &Path {
        &self.ssh_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Path of the private key file for an alias.
    pub fn key_file(&self, alias: &str) -> PathBuf {
        self.ssh_dir.join(alias)
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .or_else(|| std::env::var("HOME").ok().map(PathBuf::from))
}
