use std::path::{Path, PathBuf};

use super::schema::Subscription;
use crate::{KeysyncError, Result};

/// Reads the persisted subscription list from a JSON or JSON5 file.
pub struct SubscriptionLoader {
    path: PathBuf,
}

impl SubscriptionLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load subscriptions in file order. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Subscription>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "subscription file not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // JSON5 is a superset of JSON, so one parser covers both extensions
        let subscriptions: Vec<Subscription> = json5::from_str(&content).map_err(|e| {
            KeysyncError::SubscriptionFile(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = subscriptions.len(),
            "loaded subscriptions"
        );
        Ok(subscriptions)
    }
}
