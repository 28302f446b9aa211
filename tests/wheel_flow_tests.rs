//! Integration tests for the wheel spin in a running app
//!
//! Time is advanced manually so the 16 ms cadence fires on every update.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use dumen::core::{CorePlugin, LabelLanguage, SelectionError, StatusLine, WheelSettings};
use dumen::selection::{
    LabelTable, SelectionPlugin, SpinOutcome, SpinPlan, SpinRequested, WheelState,
};
use shakmaty::Color;
use std::time::Duration;
use web_time::Instant;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins((CorePlugin, SelectionPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)));
    app
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn marker_labels(app: &App) -> Vec<String> {
    app.world()
        .resource::<WheelState>()
        .markers()
        .iter()
        .map(|marker| marker.label.clone())
        .collect()
}

/// Start a spin whose configured duration has already passed
fn start_finished_spin(app: &mut App, names: &[&str]) {
    let started = Instant::now()
        .checked_sub(Duration::from_secs(2))
        .unwrap_or_else(Instant::now);
    let started_ok = app.world_mut().resource_mut::<WheelState>().start(
        &labels(names),
        Color::Black,
        Duration::from_millis(100),
        SpinPlan::with_turns(3.5),
        started,
    );
    assert!(started_ok);
}

fn run_until_landed(app: &mut App) {
    for _ in 0..10 {
        app.update();
        if !app.world().resource::<WheelState>().is_spinning() {
            return;
        }
    }
    panic!("spin never landed");
}

#[test]
fn test_spin_request_starts_wheel() {
    let mut app = test_app();
    app.world_mut().write_message(SpinRequested {
        side: Color::White,
        labels: labels(&["Piyon", "At"]),
        words: LabelTable::turkish(),
    });
    app.update();

    assert!(app.world().resource::<WheelState>().is_spinning());
    assert_eq!(marker_labels(&app), labels(&["Piyon", "At"]));
    assert_eq!(
        app.world().resource::<StatusLine>().text,
        "The wheel is turning..."
    );
}

#[test]
fn test_second_request_ignored_while_spinning() {
    //! A request during a spin must not replace the labels on the wheel
    let mut app = test_app();
    app.world_mut().write_message(SpinRequested {
        side: Color::White,
        labels: labels(&["Piyon", "At"]),
        words: LabelTable::turkish(),
    });
    app.update();

    app.world_mut().write_message(SpinRequested {
        side: Color::Black,
        labels: labels(&["Vezir"]),
        words: LabelTable::turkish(),
    });
    app.update();

    assert!(app.world().resource::<WheelState>().is_spinning());
    assert_eq!(marker_labels(&app), labels(&["Piyon", "At"]));
}

#[test]
fn test_finished_spin_publishes_outcome() {
    let mut app = test_app();
    start_finished_spin(&mut app, &["Piyon", "At", "Fil"]);

    run_until_landed(&mut app);

    let outcome = app.world().resource::<SpinOutcome>().clone();
    let result = outcome.result.expect("spin result");
    assert_eq!(result.side, Color::Black);
    let winner = result.winner.expect("winner");
    assert!(labels(&["Piyon", "At", "Fil"]).contains(&winner));
    assert_eq!(result.markers.len(), 3);

    let status = app.world().resource::<StatusLine>();
    assert!(!status.is_error);
    assert!(status.text.contains(&winner));
}

#[test]
fn test_empty_wheel_lands_without_result() {
    let mut app = test_app();
    start_finished_spin(&mut app, &[]);

    run_until_landed(&mut app);

    let result = app
        .world()
        .resource::<SpinOutcome>()
        .result
        .clone()
        .expect("spin result");
    assert_eq!(result.winner, Err(SelectionError::NoResult));
    assert!(app.world().resource::<StatusLine>().is_error);
}

#[test]
fn test_new_spin_clears_previous_outcome() {
    let mut app = test_app();
    start_finished_spin(&mut app, &["Şah"]);
    run_until_landed(&mut app);
    assert!(app.world().resource::<SpinOutcome>().result.is_some());

    app.world_mut().write_message(SpinRequested {
        side: Color::White,
        labels: labels(&["Kale"]),
        words: LabelTable::turkish(),
    });
    app.update();

    assert!(app.world().resource::<WheelState>().is_spinning());
    assert_eq!(app.world().resource::<SpinOutcome>().result, None);
}

#[test]
fn test_result_words_follow_the_spin_not_the_settings() {
    //! Switching language after a spin must not mix languages in the result line
    let mut app = test_app();
    app.world_mut().resource_mut::<WheelSettings>().spin_seconds = 1;
    app.world_mut().write_message(SpinRequested {
        side: Color::White,
        labels: labels(&["Knight"]),
        words: LabelTable::english(),
    });
    app.update();
    assert!(app.world().resource::<WheelState>().is_spinning());

    app.world_mut().resource_mut::<WheelSettings>().label_language = LabelLanguage::Turkish;
    std::thread::sleep(Duration::from_millis(1100));
    run_until_landed(&mut app);

    assert_eq!(
        app.world().resource::<SpinOutcome>().headline().as_deref(),
        Some("WHITE PIECE: KNIGHT")
    );
}
