//! Subcommand handlers

pub mod check;
pub mod completions;
pub mod config;
pub mod play;
pub mod scenes;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use storyline::{Config, Deck};

/// Config file to use: the `--config` flag, else the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Load the config file at `path` (defaults when it does not exist).
pub fn load_config(path: &Path) -> Result<Config> {
    Config::load_from(path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Deck for commands that take an optional deck argument.
///
/// Order: command line, then `[deck] path` from config, then the built-in deck.
pub fn resolve_deck(config: &Config, arg: Option<&Path>) -> Result<Deck> {
    let path = arg.or(config.deck.path.as_deref());
    let deck = Deck::load_or_builtin(path)?;
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn deck_argument_overrides_config() {
        let temp = TempDir::new().unwrap();
        let deck_path = temp.path().join("deck.toml");
        fs::write(
            &deck_path,
            "title = \"Arg\"\n[[scenes]]\ntitle = \"One\"\ndescription = \"Only\"\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.deck.path = Some(temp.path().join("missing.toml"));

        let deck = resolve_deck(&config, Some(&deck_path)).unwrap();
        assert_eq!(deck.title, "Arg");
    }

    #[test]
    fn configured_deck_is_used_without_argument() {
        let config = Config {
            deck: storyline::config::DeckConfig {
                path: Some(PathBuf::from("/nonexistent/deck.toml")),
            },
            ..Default::default()
        };
        assert!(resolve_deck(&config, None).is_err());
    }

    #[test]
    fn builtin_deck_is_the_fallback() {
        let deck = resolve_deck(&Config::default(), None).unwrap();
        assert_eq!(deck.len(), 5);
    }
}
