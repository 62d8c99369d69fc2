use std::path::Path;

use super::reconciler;
use crate::{Result, Settings};

pub fn execute(
    settings: &Settings,
    alias: &str,
    host: &str,
    key_file: &Path,
    proxy: Option<&str>,
) -> Result<()> {
    let key = std::fs::read_to_string(key_file)?;
    // The store appends its own line terminator
    let key = key.trim_end_matches(['\r', '\n']);

    let reconciler = reconciler(settings)?;
    reconciler.add_alias(key, alias, host, proxy)?;

    println!("Alias '{}' configured.", alias);
    println!("  Key: {}", reconciler.keys().path(alias).display());
    println!("  Config: {}", reconciler.paths().config_file().display());
    Ok(())
}
