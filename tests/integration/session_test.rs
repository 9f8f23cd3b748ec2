//! End-to-end walks through a deck: store transitions driven by the
//! commands the scene view exposes.

use storyline::tui::widgets::{ActionControl, SceneCommand, SceneView};
use storyline::tui::{SlideshowState, Theme};
use storyline::{SceneStore, Stage};

use crate::helpers::five_records;

#[test]
fn advancing_through_five_scenes_reaches_terminal() {
    let mut store = SceneStore::new(five_records()).unwrap();

    for expected in 1..5 {
        assert!(store.advance());
        assert_eq!(store.current_index(), expected);
    }
    assert!(store.is_terminal());
    assert_eq!(store.stage(), Stage::Terminal);

    // Further advances are inert
    assert!(!store.advance());
    assert!(!store.advance());
    assert_eq!(store.current_index(), 4);
}

#[test]
fn reset_from_terminal_returns_to_first_scene() {
    let mut store = SceneStore::new(five_records()).unwrap();
    while store.advance() {}
    store.reset();
    assert_eq!(store.current_index(), 0);
    assert_eq!(store.stage(), Stage::Scene { index: 0 });
    assert_eq!(store.current().record.title(), "Discovery");
}

#[test]
fn view_commands_drive_the_store() {
    let theme = Theme::default();
    let mut store = SceneStore::new(five_records()).unwrap();

    // Follow whatever control each scene offers until it asks for a restart
    let mut steps = 0;
    loop {
        let command = {
            let view = SceneView::from_current(store.current(), &theme).restart(true);
            view.activate().expect("every scene offers a control")
        };
        match command {
            SceneCommand::Advance => {
                assert!(store.advance());
            }
            SceneCommand::Restart => break,
        }
        steps += 1;
    }

    assert_eq!(steps, 4);
    assert!(store.is_terminal());
    store.reset();
    assert_eq!(store.current_index(), 0);
}

#[test]
fn terminal_scene_offers_only_restart() {
    let theme = Theme::default();
    let mut store = SceneStore::new(five_records()).unwrap();
    while store.advance() {}

    let view = SceneView::from_current(store.current(), &theme).restart(true);
    assert_eq!(view.action(), Some(ActionControl::Restart));

    let without_restart = SceneView::from_current(store.current(), &theme);
    assert_eq!(without_restart.action(), None);
}

#[test]
fn slideshow_state_loops_back_after_last_scene() {
    let mut state = SlideshowState::new(SceneStore::new(five_records()).unwrap());
    for _ in 0..4 {
        state.activate();
    }
    assert!(state.store.is_terminal());

    state.activate();
    assert_eq!(state.store.current_index(), 0);
    assert_eq!(state.visible_command(), Some(SceneCommand::Advance));
}

#[test]
fn hover_does_not_follow_to_the_next_scene() {
    let mut state = SlideshowState::new(SceneStore::new(five_records()).unwrap());
    state.set_hovering(true);
    assert!(state.is_hovering());

    state.activate();
    assert!(!state.is_hovering());
}
