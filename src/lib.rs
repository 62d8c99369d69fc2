//! Keeps SSH deploy keys and `~/.ssh/config` in sync with Git repository
//! subscriptions.
//!
//! Each private repository pulled with an SSH key gets:
//! - a private key file at `<ssh-dir>/<alias>` (mode 0400)
//! - a `Host <alias>` block in the shared SSH client config
//!
//! [`Reconciler::resync`] regenerates both from the full subscription list.

pub mod cli;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod ssh;
pub mod subscription;
pub mod utils;

pub use config::{Settings, SshPaths};
pub use error::{KeysyncError, Result};
pub use reconcile::{AliasFailure, Reconciler, ResyncReport};
pub use subscription::{format_url, GitUrlResolver, HostResolver, Subscription};
