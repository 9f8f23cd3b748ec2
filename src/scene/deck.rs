//! Deck loading
//!
//! A deck is the content table a session runs through: an ordered list of
//! scenes plus a little presentation metadata. Decks are TOML files:
//!
//! ```toml
//! title = "My Deck"
//! label = "Clue"
//!
//! [[scenes]]
//! title = "First"
//! description = "Where it starts."
//! image = "assets/first.png"
//! button_text = "Go on"
//!
//! [[scenes.info_boxes]]
//! title = "Aside"
//! content = "Extra detail."
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::error::{DeckError, SceneError};
use super::record::{ImageRef, InfoBox, SceneRecord};
use super::store::SceneStore;

/// Deck compiled into the binary, used when no deck path is given.
const BUILTIN_DECK: &str = include_str!("../../decks/deepwater-horizon.toml");

/// Caption noun used when a deck does not set `label`.
pub const DEFAULT_LABEL: &str = "Scene";

/// On-disk shape of a deck file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    scenes: Vec<SceneEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    factoid: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    button_text: String,
    #[serde(default)]
    info_boxes: Vec<InfoBox>,
}

impl SceneEntry {
    fn into_record(self) -> Result<SceneRecord, SceneError> {
        Ok(
            SceneRecord::new(self.title, self.description, ImageRef::new(self.image))?
                .with_factoid(self.factoid)
                .with_button_text(self.button_text)
                .with_info_boxes(self.info_boxes),
        )
    }
}

/// A validated scene sequence with its presentation metadata.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Deck title shown in the status line
    pub title: String,
    /// Caption noun ("Scene 2 of 5", "Clue 2 of 5")
    pub label: String,
    scenes: Vec<SceneRecord>,
}

impl Deck {
    /// Parse and validate a deck from TOML text.
    ///
    /// Every scene must have a title and description, and the deck must
    /// contain at least one scene.
    pub fn from_toml(content: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(content)?;

        if file.scenes.is_empty() {
            return Err(SceneError::EmptyDeck.into());
        }

        let scenes = file
            .scenes
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_record()
                    .map_err(|e| SceneError::InvalidScene {
                        index,
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: non_blank(file.title).unwrap_or_else(|| "Untitled deck".to_string()),
            label: non_blank(file.label).unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            scenes,
        })
    }

    /// Load a deck file from disk.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        if !path.exists() {
            return Err(DeckError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_toml(&content)?;
        info!(path = %path.display(), scenes = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// The deck shipped with the binary.
    pub fn builtin() -> Result<Self, DeckError> {
        debug!("loading built-in deck");
        Self::from_toml(BUILTIN_DECK)
    }

    /// Load `path` when given, otherwise the built-in deck.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DeckError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn scenes(&self) -> &[SceneRecord] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Hand the scenes over to a fresh store for one session.
    pub fn into_store(self) -> Result<SceneStore, SceneError> {
        SceneStore::new(self.scenes)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
