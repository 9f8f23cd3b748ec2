//! storyline - linear scene slideshows in the terminal
//!
//! A deck is an ordered list of scenes. [`SceneStore`] tracks which scene
//! is current and moves through the deck; the TUI draws the current scene
//! and turns input into store commands.

pub mod cli;
pub mod config;
pub mod logging;
pub mod scene;
pub mod tui;

pub use config::{Config, ConfigError};
pub use scene::{
    CurrentScene, Deck, DeckError, ImageRef, InfoBox, SceneError, SceneRecord, SceneStore, Stage,
};
