use super::reconciler;
use crate::{Result, Settings};

/// List the aliases in the SSH config with their key status
pub fn execute(settings: &Settings) -> Result<()> {
    let reconciler = reconciler(settings)?;
    let Some(document) = reconciler.editor().load()? else {
        println!(
            "No SSH config at {}.",
            reconciler.paths().config_file().display()
        );
        return Ok(());
    };

    if document.blocks().is_empty() {
        println!("No aliases configured.");
        return Ok(());
    }

    println!("{:<20} {:<30} {:<8} PROXY", "ALIAS", "HOSTNAME", "KEY");
    println!("{}", "-".repeat(70));

    for block in document.blocks() {
        for alias in block.patterns() {
            let key = if reconciler.keys().exists(alias) {
                "ok"
            } else {
                "missing"
            };
            println!(
                "{:<20} {:<30} {:<8} {}",
                alias,
                block.value("Hostname").unwrap_or("-"),
                key,
                block.value("ProxyCommand").map_or("-", |_| "yes")
            );
        }
    }

    Ok(())
}

/// Print the resolved file locations
pub fn paths(settings: &Settings) -> Result<()> {
    let paths = settings.ssh_paths()?;

    println!("Key directory: {}", paths.ssh_dir().display());
    println!("SSH config:    {}", paths.config_file().display());
    match &settings.subscriptions {
        Some(path) => println!("Subscriptions: {}", path.display()),
        None => println!("Subscriptions: (not set)"),
    }
    match Settings::config_path() {
        Some(path) => println!("Settings:      {}", path.display()),
        None => println!("Settings:      (unavailable)"),
    }
    Ok(())
}
