//! Repository URL handling.
//!
//! Git accepts both URL syntax (`ssh://git@host/path`, `https://host/path`)
//! and the scp-like shorthand (`git@host:path`). The url crate only covers
//! the former, so the shorthand is split by hand.

use url::Url;

use super::schema::{PullOption, PullType, Subscription, SubscriptionType};
use crate::{KeysyncError, Result};

/// Clone URL rewritten for the configured pull method, plus the real host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedUrl {
    /// URL Git should use
    pub url: String,
    /// Host the repository actually lives on
    pub host: String,
}

/// Resolves the connection host for a subscription.
pub trait HostResolver: Send + Sync {
    fn resolve_host(&self, subscription: &Subscription) -> Result<String>;
}

/// Resolves hosts by parsing the subscription's Git URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitUrlResolver;

impl HostResolver for GitUrlResolver {
    fn resolve_host(&self, subscription: &Subscription) -> Result<String> {
        format_url(subscription).map(|formatted| formatted.host)
    }
}

/// Derive the canonical host and the clone URL for a subscription.
///
/// - ssh-key private repos: the host is replaced by the alias so that Git
///   picks up the generated `Host <alias>` block.
/// - user-pwd private repos: credentials are injected into the URL.
/// - everything else: the URL is returned untouched.
pub fn format_url(subscription: &Subscription) -> Result<FormattedUrl> {
    let raw = subscription.url.trim();
    let location = RepoLocation::parse(raw)?;
    let host = location.host().to_string();

    if subscription.kind != SubscriptionType::PrivateRepo {
        return Ok(FormattedUrl {
            url: raw.to_string(),
            host,
        });
    }

    let url = match (subscription.pull_type, &subscription.pull_option) {
        (Some(PullType::SshKey), _) => location.with_host(raw, &subscription.alias)?,
        (Some(PullType::UserPwd), Some(PullOption::UserPwd { username, password })) => {
            location.with_credentials(raw, username, password)?
        }
        _ => raw.to_string(),
    };

    Ok(FormattedUrl { url, host })
}

enum RepoLocation {
    /// `[user@]host:path`
    ScpLike {
        user: Option<String>,
        host: String,
        path: String,
    },
    Url(Url),
}

impl RepoLocation {
    fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(KeysyncError::invalid_url(raw, "URL is empty"));
        }

        if raw.contains("://") {
            let url = Url::parse(raw).map_err(|e| KeysyncError::invalid_url(raw, e.to_string()))?;
            match url.host_str() {
                None | Some("") => return Err(KeysyncError::invalid_url(raw, "URL has no host")),
                Some(host) if !is_plain_host(host) => {
                    return Err(KeysyncError::invalid_url(raw, "host contains whitespace"))
                }
                Some(_) => {}
            }
            return Ok(RepoLocation::Url(url));
        }

        let (authority, path) = raw
            .split_once(':')
            .ok_or_else(|| KeysyncError::invalid_url(raw, "expected [user@]host:path"))?;
        let (user, host) = match authority.rsplit_once('@') {
            Some((user, host)) => (Some(user.to_string()), host),
            None => (None, authority),
        };
        if host.is_empty() || host.contains('/') {
            return Err(KeysyncError::invalid_url(raw, "expected [user@]host:path"));
        }
        if !is_plain_host(host) {
            return Err(KeysyncError::invalid_url(raw, "host contains whitespace"));
        }

        Ok(RepoLocation::ScpLike {
            user,
            host: host.to_string(),
            path: path.to_string(),
        })
    }

    fn host(&self) -> &str {
        match self {
            RepoLocation::ScpLike { host, .. } => host,
            RepoLocation::Url(url) => url.host_str().unwrap_or_default(),
        }
    }

    fn with_host(&self, raw: &str, alias: &str) -> Result<String> {
        match self {
            RepoLocation::ScpLike { user, path, .. } => Ok(match user {
                Some(user) => format!("{}@{}:{}", user, alias, path),
                None => format!("{}:{}", alias, path),
            }),
            RepoLocation::Url(url) => {
                let mut url = url.clone();
                url.set_host(Some(alias))
                    .map_err(|e| KeysyncError::invalid_url(raw, e.to_string()))?;
                Ok(url.to_string())
            }
        }
    }

    fn with_credentials(&self, raw: &str, username: &str, password: &str) -> Result<String> {
        match self {
            RepoLocation::ScpLike { .. } => Err(KeysyncError::invalid_url(
                raw,
                "username/password pulls need an http(s) URL",
            )),
            RepoLocation::Url(url) => {
                let mut url = url.clone();
                url.set_username(username)
                    .and_then(|_| url.set_password(Some(password)))
                    .map_err(|_| KeysyncError::invalid_url(raw, "URL cannot carry credentials"))?;
                Ok(url.to_string())
            }
        }
    }
}

/// Hosts end up on a `Hostname` line, so they must be a single token.
fn is_plain_host(host: &str) -> bool {
    !host.chars().any(|c| c.is_whitespace() || c.is_control() || c == '"')
}
