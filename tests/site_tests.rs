// Host-side tests for the page behaviors around the narrative.

use pitchutcha_core::constants::{SCROLLSPY_ACTIVATION_MARGIN_PX, THEME_STORAGE_KEY};
use pitchutcha_core::site::*;

#[test]
fn stored_theme_wins_over_system_preference() {
    assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
    assert_eq!(resolve_theme(Some("sepia"), true), Theme::Dark);
    assert_eq!(resolve_theme(None, false), Theme::Light);
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
    assert_eq!(Theme::Light.toggled().as_str(), "dark");
}

#[test]
fn theme_toggle_persists_choice() {
    let mut controller = ThemeController::load(MemoryStore::default(), true);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.toggle(), Ok(Theme::Light));
    assert_eq!(
        controller.store().get(THEME_STORAGE_KEY).as_deref(),
        Some("light")
    );

    // next visit: the stored choice beats the dark system preference
    let reloaded = ThemeController::load(controller.store().clone(), true);
    assert_eq!(reloaded.current(), Theme::Light);
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn theme_still_switches_when_storage_fails() {
    let mut controller = ThemeController::load(BrokenStore, false);
    assert_eq!(controller.toggle(), Err(StorageError::Unavailable));
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn drawer_opens_and_closes() {
    let mut drawer = Drawer::default();
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert!(!drawer.handle(DrawerEvent::EscapePressed));

    assert!(drawer.handle(DrawerEvent::Toggle));
    let view = drawer.view();
    assert!(view.open && view.body_locked);
    assert_eq!(view.aria_expanded, "true");

    assert!(!drawer.handle(DrawerEvent::ViewportResized { width: 500.0 }));
    assert!(drawer.handle(DrawerEvent::LinkActivated));
    assert_eq!(drawer.view().aria_expanded, "false");

    drawer.handle(DrawerEvent::Toggle);
    assert!(drawer.handle(DrawerEvent::ViewportResized { width: 960.0 }));
    assert_eq!(drawer.state(), DrawerState::Closed);

    drawer.handle(DrawerEvent::Toggle);
    assert!(drawer.handle(DrawerEvent::Toggle));
    assert!(!drawer.view().body_locked);

    drawer.handle(DrawerEvent::Toggle);
    assert!(drawer.handle(DrawerEvent::Close));
    assert!(!drawer.handle(DrawerEvent::Close));
}

#[test]
fn scrollspy_tracks_heading_under_header() {
    let headings = vec![
        Heading::new("b", 500.0),
        Heading::new("a", 100.0),
        Heading::new("c", 900.0),
        Heading::new("broken", f32::NAN),
    ];
    let spy = ScrollSpy::new(headings, SCROLLSPY_ACTIVATION_MARGIN_PX).unwrap();
    assert_eq!(spy.headings().len(), 3);
    let active = |y: f32| spy.active(y).map(|h| h.anchor.as_str());
    assert_eq!(active(0.0), None);
    assert_eq!(active(4.0), Some("a"));
    assert_eq!(active(403.0), Some("a"));
    assert_eq!(active(404.0), Some("b"));
    assert_eq!(active(10_000.0), Some("c"));
    assert_eq!(active(f32::NAN), None);
}

#[test]
fn scrollspy_follows_headings_after_reflow() {
    let mut spy = ScrollSpy::new(
        vec![Heading::new("a", 100.0), Heading::new("b", 500.0)],
        SCROLLSPY_ACTIVATION_MARGIN_PX,
    )
    .unwrap();
    assert_eq!(spy.active(600.0).map(|h| h.anchor.as_str()), Some("b"));

    // narrower viewport: text wraps and the second heading moves down
    spy.relayout(vec![Heading::new("b", 1000.0), Heading::new("a", 200.0)]).unwrap();
    assert_eq!(spy.active(600.0).map(|h| h.anchor.as_str()), Some("a"));
    assert_eq!(spy.active(100.0), None);
    assert_eq!(spy.headings()[1].offset, 1000.0);

    // headings that cannot be measured drop out
    spy.relayout(vec![Heading::new("a", 0.0), Heading::new("b", f32::INFINITY)]).unwrap();
    assert_eq!(spy.headings().len(), 1);
    assert_eq!(spy.active(10_000.0).map(|h| h.anchor.as_str()), Some("a"));
}

#[test]
fn reveal_is_sticky_and_fires_once() {
    let mut tracker = RevealTracker::new(3);
    assert!(!tracker.observe(0, 0.1));
    assert!(tracker.observe(0, 0.2));
    assert!(!tracker.observe(0, 1.0));
    assert!(!tracker.observe(0, 0.0));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.observe(9, 1.0));
    assert_eq!(tracker.revealed_count(), 1);
    assert!(!tracker.all_revealed());

    assert!(tracker.observe(1, 0.5));
    assert!(tracker.observe(2, 0.9));
    assert!(tracker.all_revealed());

    let mut eager = RevealTracker::with_threshold(1, 0.0);
    assert!(!eager.observe(0, 0.0));
    assert!(eager.observe(0, 0.01));
}

#[test]
fn reveal_stagger_is_capped() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(1), 80);
    assert_eq!(stagger_delay_ms(5), 400);
    assert_eq!(stagger_delay_ms(6), 480);
    assert_eq!(stagger_delay_ms(1_000), 480);
    assert_eq!(stagger_delay_ms(usize::MAX), 480);
}

#[test]
fn preloader_counts_fades_then_finishes() {
    let timeline = PreloaderTimeline::default();
    assert_eq!(timeline.phase_at(0.0), PreloaderPhase::Counting { counter: 0 });
    assert_eq!(timeline.counter_at(900.0), 50);
    assert_eq!(timeline.phase_at(1800.0), PreloaderPhase::Revealing { opacity: 1.0 });
    match timeline.phase_at(2100.0) {
        PreloaderPhase::Revealing { opacity } => assert!((opacity - 0.5).abs() < 1e-4),
        other => panic!("expected fade, got {:?}", other),
    }
    assert_eq!(timeline.phase_at(2400.0), PreloaderPhase::Done);
    assert_eq!(timeline.phase_at(f64::NAN), PreloaderPhase::Counting { counter: 0 });

    let mut last = 0;
    for ms in (0..=1800).step_by(50) {
        let c = timeline.counter_at(ms as f64);
        assert!(c >= last && c <= 100);
        last = c;
    }
    assert_eq!(last, 100);
}

#[test]
fn hero_items_enter_in_sequence_after_preloader() {
    let timeline = PreloaderTimeline::default();
    let total = timeline.total_ms();
    assert_eq!(total, 2400.0);
    assert!(!timeline.hero_item_visible(0, total - 1.0));
    assert!(timeline.hero_item_visible(0, total));
    assert!(!timeline.hero_item_visible(1, total));
    assert!(timeline.hero_item_visible(1, total + 120.0));
}

#[test]
fn fuzzy_score_rewards_word_starts_and_runs() {
    assert_eq!(fuzzy_score("gf", "Go to Future"), Some(8));
    assert_eq!(fuzzy_score("go", "Go to"), Some(7));
    assert_eq!(fuzzy_score("GO", "go to"), Some(7));
    assert_eq!(fuzzy_score("xyz", "Go to Future"), None);
    assert_eq!(fuzzy_score("fg", "Go to Future"), None);
    assert_eq!(fuzzy_score("", "anything"), Some(0));
    assert!(fuzzy_score("tt", "toggle theme") > fuzzy_score("tt", "contact us"));
}

#[test]
fn palette_filters_and_ranks_commands() {
    let mut palette = CommandPalette::pitchutcha();
    palette.open();
    assert!(palette.is_open());
    assert_eq!(palette.result_count(), 7);

    palette.set_query("theme");
    assert_eq!(palette.selected().map(|c| c.id), Some("toggle-theme"));

    // equal scores keep declaration order
    palette.set_query("go");
    let ids: Vec<&str> = palette.results().take(4).map(|c| c.id).collect();
    assert_eq!(ids, vec!["go-humanity", "go-science", "go-technology", "go-future"]);

    // keywords count too
    palette.set_query("vision");
    assert_eq!(palette.selected().map(|c| c.id), Some("go-future"));

    palette.set_query("qqq");
    assert_eq!(palette.result_count(), 0);
    assert_eq!(palette.activate(), None);
}

#[test]
fn palette_selection_wraps_and_activation_closes() {
    let mut palette = CommandPalette::pitchutcha();
    palette.open();
    palette.move_selection(-1);
    assert_eq!(palette.selected_index(), 6);
    palette.move_selection(1);
    assert_eq!(palette.selected_index(), 0);
    palette.move_selection(9);
    assert_eq!(palette.selected_index(), 2);

    assert_eq!(
        palette.activate(),
        Some(CommandAction::ScrollTo("chapter-technology".into()))
    );
    assert!(!palette.is_open());

    palette.toggle();
    assert!(palette.is_open());
    assert_eq!(palette.query(), "");
    assert_eq!(palette.selected_index(), 0);
}

fn sample_index() -> SearchIndex {
    SearchIndex::new(vec![
        SearchEntry::new("Humanity", "chapter-humanity", "People and stories of the globe"),
        SearchEntry::new("Science", "chapter-science", "Research about humanity and the globe"),
        SearchEntry::new("Future", "chapter-future", "Vision"),
    ])
}

#[test]
fn search_ranks_title_hits_first() {
    let index = sample_index();
    let hits = index.search("HUMANITY", 8);
    let anchors: Vec<&str> = hits.iter().map(|h| h.entry.anchor.as_str()).collect();
    assert_eq!(anchors, vec!["chapter-humanity", "chapter-science"]);
    assert_eq!(hits[0].score, 3);
    assert_eq!(hits[1].score, 1);

    let both = index.search("globe humanity", 8);
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].score, 4);
    assert_eq!(both[1].score, 2);
}

#[test]
fn search_requires_every_term_and_respects_limit() {
    let index = sample_index();
    assert!(index.search("globe vision", 8).is_empty());
    assert!(index.search("   ", 8).is_empty());
    let first = index.search("globe", 1);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].entry.title, "Humanity");
}

#[test]
fn focus_trap_wraps_both_ways() {
    let mut trap = FocusTrap::new(3);
    assert_eq!(trap.next(), 1);
    assert_eq!(trap.next(), 2);
    assert_eq!(trap.next(), 0);
    assert_eq!(trap.prev(), 2);
    trap.resize(2);
    assert_eq!(trap.index(), 0);

    let mut empty = FocusTrap::new(0);
    assert!(empty.is_empty());
    assert_eq!(empty.next(), 0);
    assert_eq!(empty.prev(), 0);
}

#[test]
fn shortcuts_map_keys_and_modifiers() {
    assert_eq!(shortcut_for("k", true, false, false), Some(Shortcut::TogglePalette));
    assert_eq!(shortcut_for("K", false, true, false), Some(Shortcut::TogglePalette));
    assert_eq!(shortcut_for("k", false, false, false), None);
    assert_eq!(shortcut_for("/", false, false, false), Some(Shortcut::OpenSearch));
    assert_eq!(shortcut_for("/", true, false, false), None);
    assert_eq!(shortcut_for("t", false, false, false), Some(Shortcut::ToggleTheme));
    assert_eq!(shortcut_for("t", true, false, false), None);
    assert_eq!(shortcut_for("Escape", false, false, false), Some(Shortcut::Close));
    assert_eq!(shortcut_for("ArrowUp", false, false, false), Some(Shortcut::SelectPrev));
    assert_eq!(shortcut_for("ArrowDown", false, false, false), Some(Shortcut::SelectNext));
    assert_eq!(shortcut_for("Enter", false, false, false), Some(Shortcut::Activate));
    assert_eq!(shortcut_for("Tab", false, false, false), Some(Shortcut::FocusNext));
    assert_eq!(shortcut_for("Tab", false, false, true), Some(Shortcut::FocusPrev));
    assert_eq!(shortcut_for("x", false, false, false), None);
}

#[test]
fn letter_shortcuts_stay_out_of_text_fields() {
    assert!(!allowed_while_typing(Shortcut::OpenSearch));
    assert!(!allowed_while_typing(Shortcut::ToggleTheme));
    assert!(allowed_while_typing(Shortcut::Close));
    assert!(allowed_while_typing(Shortcut::TogglePalette));
    assert!(allowed_while_typing(Shortcut::Activate));
}
