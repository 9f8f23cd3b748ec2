//! Rendering of scenes through the public widget API

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use storyline::tui::widgets::progress::MarkerState;
use storyline::tui::widgets::scene_view::{FACTOID_HEADING, RESTART_LABEL};
use storyline::tui::widgets::{SceneView, SceneViewState, ViewBlock};
use storyline::tui::{render_slideshow, SlideshowOptions, SlideshowState, Theme};
use storyline::{Deck, SceneStore, Stage};

use crate::helpers::{five_records, SMALL_DECK};

fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render_view(view: SceneView, width: u16, height: u16) -> (String, SceneViewState) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut state = SceneViewState::default();
    terminal
        .draw(|frame| frame.render_stateful_widget(view, frame.area(), &mut state))
        .unwrap();
    (buffer_text(terminal.backend().buffer()), state)
}

#[test]
fn middle_scene_shows_progress_and_advance_control() {
    let theme = Theme::default();
    let records = five_records();
    let view = SceneView::new(&records[2], 2, 5, &theme);

    let blocks = view.blocks();
    match &blocks[0] {
        ViewBlock::Progress { markers, caption } => {
            assert_eq!(
                markers,
                &vec![
                    MarkerState::Completed,
                    MarkerState::Completed,
                    MarkerState::Active,
                    MarkerState::Pending,
                    MarkerState::Pending,
                ]
            );
            assert_eq!(caption, "Scene 3 of 5");
        }
        other => panic!("expected progress first, got {:?}", other),
    }

    let (text, state) = render_view(view, 90, 40);
    assert!(text.contains("Ocean"));
    assert!(text.contains("Next from Ocean"));
    assert!(text.contains(FACTOID_HEADING));
    assert!(state.action_area.is_some());
    assert!(state.image_area.is_some());
}

#[test]
fn first_scene_without_factoid_has_no_note() {
    let theme = Theme::default();
    let records = five_records();
    let view = SceneView::new(&records[0], 0, 5, &theme);
    assert!(!view
        .blocks()
        .iter()
        .any(|b| matches!(b, ViewBlock::Factoid(_))));

    let (text, _) = render_view(view, 90, 40);
    assert!(!text.contains(FACTOID_HEADING));
}

#[test]
fn terminal_scene_lists_info_boxes_and_restart() {
    let theme = Theme::default();
    let records = five_records();
    let view = SceneView::new(&records[4], 4, 5, &theme)
        .stage(Stage::Terminal)
        .restart(true)
        .hovering(true);

    assert!(!view.is_magnified());
    let titles: Vec<&str> = view
        .blocks()
        .iter()
        .filter_map(|b| match b {
            ViewBlock::InfoBox(info) => Some(info.title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Numbers", "Remember", "Help"]);

    let (text, _) = render_view(view, 90, 50);
    assert!(text.contains(RESTART_LABEL));
    assert!(!text.contains("Next from Summary"));
}

#[test]
fn custom_deck_renders_with_its_label() {
    let deck = Deck::from_toml(SMALL_DECK).unwrap();
    let options = SlideshowOptions {
        title: deck.title.clone(),
        label: deck.label.clone(),
        ..Default::default()
    };
    let mut state = SlideshowState::new(deck.into_store().unwrap());

    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|frame| render_slideshow(frame, &mut state, &options))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("STOP 1 OF 3"));
    assert!(text.contains("Tide Pools"));
    assert!(text.contains("Look Closer"));
}

#[test]
fn single_scene_deck_is_terminal_immediately() {
    let records = five_records().into_iter().take(1).collect();
    let store = SceneStore::new(records).unwrap();
    let theme = Theme::default();
    let view = SceneView::from_current(store.current(), &theme).restart(true);

    let (text, _) = render_view(view, 80, 30);
    assert!(text.contains(RESTART_LABEL));
}
