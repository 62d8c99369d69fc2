use std::borrow::Cow;
use std::path::Path;

use crate::config::SshPaths;

/// Host that gets routed through GitHub's SSH-over-HTTPS endpoint
pub const GITHUB_HOST: &str = "github.com";

/// Port 443 endpoint for networks that block outbound port 22
const GITHUB_SSH_OVER_HTTPS: &[&str] = &[
    "Hostname ssh.github.com",
    "Port 443",
    "HostkeyAlgorithms +ssh-rsa",
    "PubkeyAcceptedAlgorithms +ssh-rsa",
];

/// Host-key checking is disabled so unattended pulls never stop on a
/// fingerprint prompt. This trusts whatever key the host presents.
pub const STRICT_HOST_KEY_CHECKING: &str = "StrictHostKeyChecking no";

const INDENT: &str = "    ";

/// Renders the `Host` block for one alias.
#[derive(Debug, Clone)]
pub struct ConfigBlockBuilder {
    paths: SshPaths,
}

impl ConfigBlockBuilder {
    pub fn new(paths: &SshPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }

    /// Build the block text. The result ends with a newline; blocks are
    /// separated by a blank line when written together.
    pub fn build(&self, alias: &str, host: &str, proxy: Option<&str>) -> String {
        let mut lines: Vec<Cow<'_, str>> = vec![Cow::Owned(format!("Host {}", alias))];

        if host == GITHUB_HOST {
            lines.extend(GITHUB_SSH_OVER_HTTPS.iter().map(|l| Cow::Borrowed(*l)));
        } else {
            lines.push(Cow::Owned(format!("Hostname {}", host)));
        }

        lines.push(Cow::Owned(format!(
            "IdentityFile {}",
            quote_path(&self.paths.key_file(alias))
        )));

        if let Some(proxy) = proxy.map(str::trim).filter(|p| !p.is_empty()) {
            lines.push(Cow::Owned(proxy_command(proxy)));
        }

        lines.push(Cow::Borrowed(STRICT_HOST_KEY_CHECKING));

        let mut block = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                block.push_str(INDENT);
            }
            block.push_str(line);
            block.push('\n');
        }
        block
    }
}

/// SOCKS relay through netcat; ssh hands ProxyCommand to a shell
fn proxy_command(proxy: &str) -> String {
    let is_plain_endpoint = proxy
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '-' | '_'));
    let proxy = if is_plain_endpoint {
        Cow::Borrowed(proxy)
    } else {
        shell_escape::unix::escape(Cow::Borrowed(proxy))
    };
    format!("ProxyCommand nc -v -x {} %h %p", proxy)
}

fn quote_path(path: &Path) -> String {
    let path = path.display().to_string();
    if path.contains(char::is_whitespace) {
        format!("\"{}\"", path)
    } else {
        path
    }
}
