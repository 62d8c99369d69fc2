pub mod add;
pub mod remove;
pub mod resync;
pub mod show;

use crate::{Reconciler, Result, Settings};

/// Build a reconciler for the configured SSH paths.
fn reconciler(settings: &Settings) -> Result<Reconciler> {
    Ok(Reconciler::new(settings.ssh_paths()?))
}
