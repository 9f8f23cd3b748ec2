//! Scene domain: records, decks, and the progression state machine.
//!
//! # Architecture
//!
//! - `record`: `SceneRecord`, `InfoBox`, `ImageRef` (immutable content)
//! - `store`: `SceneStore` with its bounded index and `Stage`
//! - `deck`: TOML deck files and the built-in deck
//! - `error`: `SceneError` and `DeckError`

pub mod deck;
pub mod error;
pub mod record;
pub mod store;

pub use deck::Deck;
pub use error::{DeckError, SceneError};
pub use record::{ImageRef, InfoBox, SceneRecord};
pub use store::{CurrentScene, SceneStore, Stage};
