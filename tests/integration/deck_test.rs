//! Deck files loaded from disk

use tempfile::TempDir;

use storyline::scene::record::DEFAULT_BUTTON_TEXT;
use storyline::{Deck, DeckError, SceneError};

use crate::helpers::{write_file, SMALL_DECK};

#[test]
fn loads_deck_from_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "tide.toml", SMALL_DECK);

    let deck = Deck::load(&path).unwrap();
    assert_eq!(deck.title, "Tide Pools");
    assert_eq!(deck.label, "Stop");
    assert_eq!(deck.len(), 3);

    let scenes = deck.scenes();
    assert_eq!(scenes[0].button_text(), "Look Closer");
    assert_eq!(scenes[1].button_text(), DEFAULT_BUTTON_TEXT);
    assert_eq!(scenes[1].factoid(), Some("Anemones are related to jellyfish."));
    assert_eq!(scenes[2].info_boxes().len(), 2);
    assert_eq!(scenes[2].image().file_name(), "recap.png");
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = Deck::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, DeckError::NotFound { .. }));
}

#[test]
fn deck_without_scenes_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "empty.toml", "title = \"Nothing\"\n");
    let err = Deck::load(&path).unwrap_err();
    assert!(matches!(err, DeckError::Invalid(SceneError::EmptyDeck)));
}

#[test]
fn scene_missing_description_names_its_position() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        temp.path(),
        "bad.toml",
        "[[scenes]]\ntitle = \"Fine\"\ndescription = \"ok\"\n\n[[scenes]]\ntitle = \"Broken\"\n",
    );
    let err = Deck::load(&path).unwrap_err();
    assert_eq!(err.to_string(), "Scene 2 is invalid");
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        temp.path(),
        "typo.toml",
        "[[scenes]]\ntitle = \"A\"\ndescription = \"B\"\nfactiod = \"typo\"\n",
    );
    assert!(matches!(Deck::load(&path), Err(DeckError::Parse(_))));
}
