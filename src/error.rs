use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeysyncError {
    // Alias Errors
    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("Invalid host '{0}': must be a single token without whitespace or control characters")]
    InvalidHost(String),

    #[error("Invalid proxy '{0}': must be a single token without whitespace or control characters")]
    InvalidProxy(String),

    // Subscription Errors
    #[error("Subscription '{0}' uses ssh-key pulls but has no private key")]
    MissingPrivateKey(String),

    #[error("Cannot resolve host from repository URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Subscription file error: {0}")]
    SubscriptionFile(String),

    #[error("Resync incomplete: {0} alias(es) could not be configured")]
    ResyncIncomplete(usize),

    // Key File Errors
    #[error("Failed to write private key file {}: {source}", .path.display())]
    KeyWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove private key file {}: {source}", .path.display())]
    KeyRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // SSH Config Errors
    #[error("Failed to read SSH config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write SSH config {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Settings Errors
    #[error("Configuration error: {0}")]
    Config(String),

    // File/IO Errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // User cancelled
    #[error("Operation cancelled by user")]
    Cancelled,
}

impl KeysyncError {
    pub fn invalid_alias(alias: &str, reason: impl Into<String>) -> Self {
        KeysyncError::InvalidAlias {
            alias: alias.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        KeysyncError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeysyncError>;
