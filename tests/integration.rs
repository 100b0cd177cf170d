// SPDX-License-Identifier: MPL-2.0
//! Cross-module scenarios driven through the public API.

use std::time::{Duration, Instant};
use tabdeck::config::{self, Config};
use tabdeck::feedback::Conductor;
use tabdeck::i18n::I18n;
use tabdeck::tabs::{Tab, TabStore};
use tabdeck::ui::switcher::{component, layout, Phase, State, ViewMode};
use tempfile::tempdir;

fn store_with(amounts: &[u32]) -> TabStore {
    let tabs = amounts
        .iter()
        .map(|&amount| Tab::with_amount("tab", "https://github.com", "🌐", amount))
        .collect();
    TabStore::with_tabs(tabs)
}

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn configured_pinched_spacing_reaches_the_layout() {
    let config = Config {
        pinched_stack_spacing: Some(-185.0),
        ..Config::default()
    };
    let mut state = State::new(&config);
    let store = store_with(&[10_000]);
    let mut feedback = Conductor::new();
    let now = Instant::now();

    assert_eq!(state.stack_spacing(), layout::NORMAL_STACK_SPACING);
    state.pinch_ended(0.5, &store, &mut feedback, now);
    assert_eq!(state.stack_spacing(), -185.0);
}

#[test]
fn pinch_in_then_full_reveal_then_pinch_out() {
    let store = store_with(&[10_000, 20_000, 30_000, 40_000]);
    let mut state = State::default();
    let mut feedback = Conductor::new();
    let start = Instant::now();

    state.pinch_ended(0.5, &store, &mut feedback, start);
    assert_eq!(state.view_mode(), ViewMode::Pinched);
    assert_eq!(feedback.pulse_count(), 1);

    // Reveal runs at i * 0.1 + 0.4 seconds; drive the tick past the end.
    let reveal_end = start + component::reveal_duration(store.len());
    state.tick(&store, &mut feedback, reveal_end);

    assert_eq!(state.phase(), Phase::Pinched);
    for index in 0..store.len() {
        assert!(state.is_settled(index));
    }
    // One pulse for the transition plus one per settled card.
    assert_eq!(feedback.pulse_count(), 1 + store.len() as u64);

    // The counter has finished too: 0.8s < reveal end for four cards.
    state.tick(&store, &mut feedback, reveal_end + Duration::from_secs(1));
    assert_eq!(state.displayed_total(), 100_000);

    state.pinch_ended(1.5, &store, &mut feedback, reveal_end + Duration::from_secs(1));
    assert_eq!(state.phase(), Phase::Normal);
    assert_eq!(state.settled_count(), 0);
}

#[test]
fn aborting_the_reveal_leaves_no_card_settled() {
    let store = store_with(&[10_000, 20_000, 30_000]);
    let mut state = State::default();
    let mut feedback = Conductor::new();
    let start = Instant::now();

    state.pinch_ended(0.5, &store, &mut feedback, start);
    state.tick(&store, &mut feedback, start + Duration::from_millis(450));
    assert_eq!(state.settled_count(), 1);

    // Back to normal before the remaining reveals fire.
    state.double_tapped(&store, &mut feedback, start + Duration::from_millis(500));
    assert_eq!(state.phase(), Phase::Normal);

    state.tick(&store, &mut feedback, start + Duration::from_secs(10));
    assert_eq!(state.settled_count(), 0);
    assert_eq!(state.phase(), Phase::Normal);
}

#[test]
fn tapped_card_flattens_and_neighbors_keep_their_tilt() {
    let store = store_with(&[10_000, 20_000, 30_000]);
    let mut state = State::default();
    let mut feedback = Conductor::new();
    let now = Instant::now();
    let middle = store.all()[1].id();

    state.update(
        component::Message::CardPressed(middle),
        &store,
        &mut feedback,
        now,
    );
    assert_eq!(state.tapped(), Some(middle));

    let tapped_transform = layout::card_transform(&state.card_context(1, middle));
    assert_eq!(tapped_transform.rotation_degrees, 0.0);
    assert_eq!(tapped_transform.top_padding, layout::TAPPED_TOP_PADDING);

    for index in [0_usize, 2] {
        let id = store.all()[index].id();
        let transform = layout::card_transform(&state.card_context(index, id));
        assert!(transform.rotation_degrees < 0.0);
        assert_eq!(transform.top_padding, 0.0);
    }

    // Tapping again reverts to the interpolated rotation.
    state.update(
        component::Message::CardPressed(middle),
        &store,
        &mut feedback,
        now + Duration::from_millis(600),
    );
    assert!(state.tapped().is_none());
    let reverted = layout::card_transform(&state.card_context(1, middle));
    assert!(reverted.rotation_degrees < 0.0);
}

#[test]
fn counter_retrigger_never_regresses_past_the_new_sequence() {
    let mut store = store_with(&[40_000]);
    let mut state = State::default();
    let mut feedback = Conductor::new();
    let start = Instant::now();

    state.pinch_ended(0.5, &store, &mut feedback, start);

    // Let half of the first sequence play out.
    let halfway = start + Duration::from_millis(400);
    state.tick(&store, &mut feedback, halfway);
    let displayed_before = state.displayed_total();
    assert!(displayed_before > 0);

    // A new tab retriggers the counter toward the larger total.
    store.add(Tab::with_amount("tab", "https://github.com", "🌐", 60_000));
    state.tab_added(&store, halfway);

    // Walk the clock forward in small steps; emissions from the stale
    // sequence would show up as values of the old 40k ramp.
    let mut previous = 0;
    for ms in (0..=1000).step_by(50) {
        state.tick(&store, &mut feedback, halfway + Duration::from_millis(ms));
        let displayed = state.displayed_total();
        assert!(displayed >= previous);
        previous = displayed;
    }
    assert_eq!(previous, 100_000);
}
