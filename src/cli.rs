//! Command line interface definition
//!
//! Lives in the library so the man page generator can reuse it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string: crate version, git SHA (dev builds) and build date.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("STORYLINE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STORYLINE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(version = VERSION)]
#[command(about = "Step through illustrated story decks in the terminal")]
#[command(long_about = "Step through illustrated story decks in the terminal.

Without a subcommand the configured deck (or the built-in one) is played.

EXAMPLES:
    storyline                      Play the default deck
    storyline play story.toml      Play a deck file
    storyline scenes --json        List the scenes as JSON
    storyline check story.toml     Validate a deck file")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a deck in the terminal
    #[command(long_about = "Play a deck in the terminal.

Enter, Space or the right arrow activates the button on screen. On the last
scene that button starts the deck over. Press ? for all key bindings.")]
    Play {
        /// Deck file (defaults to [deck] path in config, then the built-in deck)
        #[arg(value_name = "DECK")]
        deck: Option<PathBuf>,
    },

    /// List the scenes of a deck
    Scenes {
        /// Deck file (defaults to [deck] path in config, then the built-in deck)
        #[arg(value_name = "DECK")]
        deck: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a deck file
    Check {
        /// Deck file to validate
        #[arg(value_name = "DECK")]
        deck: PathBuf,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
