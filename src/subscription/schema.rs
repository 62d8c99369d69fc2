use serde::{Deserialize, Serialize};

/// A repository subscription as persisted by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    #[serde(default)]
    pub name: String,
    /// Unique identifier; doubles as key file name and `Host` entry
    pub alias: String,
    #[serde(rename = "type")]
    pub kind: SubscriptionType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_type: Option<PullType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_option: Option<PullOption>,
    /// SOCKS proxy endpoint, e.g. `127.0.0.1:1080`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(default)]
    pub is_disabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionType {
    PublicRepo,
    PrivateRepo,
    File,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PullType {
    SshKey,
    UserPwd,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PullOption {
    SshKey { private_key: String },
    UserPwd { username: String, password: String },
}

impl Subscription {
    /// Private repository pulled with a deploy key
    pub fn uses_ssh_key(&self) -> bool {
        self.kind == SubscriptionType::PrivateRepo && self.pull_type == Some(PullType::SshKey)
    }

    /// Private key material, when the pull options carry one
    pub fn private_key(&self) -> Option<&str> {
        match &self.pull_option {
            Some(PullOption::SshKey { private_key }) => Some(private_key),
            _ => None,
        }
    }

    /// Proxy endpoint, treating an empty string as unset
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref().filter(|p| !p.trim().is_empty())
    }
}

impl std::fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionType::PublicRepo => write!(f, "public-repo"),
            SubscriptionType::PrivateRepo => write!(f, "private-repo"),
            SubscriptionType::File => write!(f, "file"),
        }
    }
}
