use dialoguer::Confirm;

use super::reconciler;
use crate::ssh::validate_alias;
use crate::{KeysyncError, Result, Settings};

pub fn execute(settings: &Settings, alias: &str, force: bool) -> Result<()> {
    validate_alias(alias)?;

    // Confirm removal unless forced
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove the private key and SSH config block for '{}'?",
                alias
            ))
            .default(false)
            .interact()
            .map_err(|_| KeysyncError::Cancelled)?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if reconciler(settings)?.remove_alias(alias)? {
        println!("Alias '{}' removed.", alias);
    } else {
        println!("Alias '{}' was not configured.", alias);
    }
    Ok(())
}
