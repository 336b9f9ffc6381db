//! Config command implementation.

use crate::cli::ConfigAction;
use crate::config::Settings;
use anyhow::Result;
use std::path::Path;

/// Run the config command.
///
/// `config_path` is the file the settings were loaded from (it may not exist).
pub fn run_config(action: &ConfigAction, config_path: &Path, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", settings.to_redacted_toml()?);
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}
