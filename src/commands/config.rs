//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use storyline::tui::current_theme;
use storyline::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write a config file with default settings.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
