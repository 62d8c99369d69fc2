use std::path::PathBuf;

use super::reconciler;
use crate::subscription::SubscriptionLoader;
use crate::{KeysyncError, Result, Settings};

pub fn execute(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let path = file.or_else(|| settings.subscriptions.clone()).ok_or_else(|| {
        KeysyncError::Config(
            "No subscription file given. Pass --file or set 'subscriptions' in the config."
                .to_string(),
        )
    })?;

    let subscriptions = SubscriptionLoader::new(&path).load()?;
    let reconciler = reconciler(settings)?;
    let report = reconciler.resync(&subscriptions)?;

    println!(
        "Wrote {} with {} alias(es)",
        reconciler.paths().config_file().display(),
        report.configured.len()
    );
    for alias in &report.configured {
        println!("  + {}", alias);
    }
    for alias in &report.pruned {
        println!("  - {} (stale key removed)", alias);
    }

    if report.is_complete() {
        return Ok(());
    }

    println!();
    println!("Failed:");
    for failure in &report.failures {
        println!("  ! {}: {}", failure.alias, failure.error);
    }
    Err(KeysyncError::ResyncIncomplete(report.failures.len()))
}
