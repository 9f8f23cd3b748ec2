use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use storyline::cli::{Cli, Commands, ConfigCommands};
use storyline::tui::{current_theme, set_theme, Theme};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    let config_path = commands::resolve_config_path(cli.config.as_deref())?;
    let config = commands::load_config(&config_path)?;

    match Theme::by_name(&config.display.theme) {
        Some(theme) => set_theme(theme),
        None => eprintln!(
            "{}",
            current_theme().secondary_text(&format!(
                "Unknown theme '{}', using the default (available: {})",
                config.display.theme,
                Theme::NAMES.join(", ")
            ))
        ),
    }

    match cli.command.unwrap_or(Commands::Play { deck: None }) {
        Commands::Play { deck } => commands::play::handle(&config, deck.as_deref()),
        Commands::Scenes { deck, json } => commands::scenes::handle(&config, deck.as_deref(), json),
        Commands::Check { deck } => commands::check::handle(&deck),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
