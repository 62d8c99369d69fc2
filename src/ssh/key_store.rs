use std::path::{Path, PathBuf};

use super::validate_alias;
use crate::config::SshPaths;
use crate::utils::fs::{ensure_private_dir, write_atomic};
use crate::{KeysyncError, Result};

/// Owner read-only, the mode ssh expects for identity files
pub const KEY_FILE_MODE: u32 = 0o400;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// One private key file per alias under the ssh directory.
#[derive(Debug, Clone)]
pub struct KeyFileStore {
    paths: SshPaths,
}

impl KeyFileStore {
    pub fn new(paths: &SshPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        self.paths.ssh_dir()
    }

    /// Path of the key file for an alias
    pub fn path(&self, alias: &str) -> PathBuf {
        self.paths.key_file(alias)
    }

    pub fn exists(&self, alias: &str) -> bool {
        validate_alias(alias).is_ok() && self.path(alias).is_file()
    }

    /// Write key material for an alias, replacing any existing key.
    ///
    /// The file holds the key followed by one line terminator, since ssh
    /// rejects OpenSSH keys whose armour lacks a final newline.
    pub fn write(&self, alias: &str, key: &str) -> Result<PathBuf> {
        validate_alias(alias)?;
        let path = self.path(alias);

        let contents = format!("{}{}", key, LINE_ENDING);
        let result = ensure_private_dir(self.dir())
            .and_then(|_| write_atomic(&path, contents.as_bytes(), KEY_FILE_MODE));

        if let Err(source) = result {
            tracing::error!(alias, path = %path.display(), error = %source, "failed to write private key file");
            return Err(KeysyncError::KeyWrite { path, source });
        }

        tracing::debug!(alias, path = %path.display(), "wrote private key file");
        Ok(path)
    }

    /// Delete the key file for an alias. Returns whether a file was removed.
    pub fn remove(&self, alias: &str) -> Result<bool> {
        validate_alias(alias)?;
        let path = self.path(alias);

        // Remove directly instead of checking exists() first to avoid TOCTOU
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(alias, path = %path.display(), "removed private key file");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => {
                tracing::error!(alias, path = %path.display(), error = %source, "failed to remove private key file");
                Err(KeysyncError::KeyRemove { path, source })
            }
        }
    }
}
