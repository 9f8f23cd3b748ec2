//! Scene and deck errors.

use std::path::PathBuf;

/// Errors raised while building scenes or a scene store.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("A deck needs at least one scene")]
    EmptyDeck,

    #[error("Scene is missing a required field: {field}")]
    MissingField { field: &'static str },

    #[error("Scene {} is invalid", .index + 1)]
    InvalidScene {
        index: usize,
        #[source]
        source: Box<SceneError>,
    },
}

/// Errors that can occur while loading a deck file.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Deck file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read deck {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SceneError),
}
