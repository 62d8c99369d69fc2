use crate::{KeysyncError, Result};

/// Files in ~/.ssh that an alias must never overwrite
const RESERVED_NAMES: &[&str] = &[
    "config",
    "known_hosts",
    "known_hosts.old",
    "authorized_keys",
    "authorized_keys2",
    "environment",
    "rc",
];

/// Validate an alias before it is used as a file name and a `Host` token.
pub fn validate_alias(alias: &str) -> Result<()> {
    if alias.is_empty() {
        return Err(KeysyncError::invalid_alias(alias, "alias cannot be empty"));
    }
    if alias.contains("..") || alias.contains('/') || alias.contains('\\') {
        return Err(KeysyncError::invalid_alias(
            alias,
            "path traversal characters not allowed",
        ));
    }
    if alias.starts_with('.') || alias.starts_with('-') {
        return Err(KeysyncError::invalid_alias(
            alias,
            "alias cannot start with '.' or '-'",
        ));
    }
    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(KeysyncError::invalid_alias(
            alias,
            "only ASCII alphanumeric, dash, underscore, and dot allowed",
        ));
    }
    if RESERVED_NAMES.contains(&alias) || alias.ends_with(".pub") {
        return Err(KeysyncError::invalid_alias(
            alias,
            "name is reserved by OpenSSH",
        ));
    }
    Ok(())
}

/// A value written verbatim after a directive keyword must stay one token
/// on one line.
fn is_config_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Validate a host before it lands on a `Hostname` line.
pub fn validate_host(host: &str) -> Result<()> {
    if !is_config_token(host) || host.contains('"') {
        return Err(KeysyncError::InvalidHost(host.escape_debug().to_string()));
    }
    Ok(())
}

/// Validate a proxy endpoint before it lands in a `ProxyCommand` line.
pub fn validate_proxy(proxy: &str) -> Result<()> {
    if !is_config_token(proxy) {
        return Err(KeysyncError::InvalidProxy(proxy.escape_debug().to_string()));
    }
    Ok(())
}
