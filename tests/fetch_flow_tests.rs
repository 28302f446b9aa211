//! Integration tests for the fetch → spin hand-off
//!
//! Runs the core, resolver and selection plugins in a headless app and feeds
//! the fetch job by hand, so no test touches the network.

use bevy::prelude::*;
use crossbeam_channel::Sender;
use dumen::core::{CorePlugin, ResolveError, ResolveResult, StatusLine};
use dumen::resolver::{
    spawn_fetch, FetchJob, FetchMessage, FetchRequested, GameSource, PositionString,
    ResolveProgress, Resolver, ResolverPlugin, NO_MOVABLE_PIECE,
};
use dumen::selection::{SelectionPlugin, SpinOutcome, WheelState};
use std::thread;
use std::time::Duration;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const FOOLS_MATE_FEN: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins((CorePlugin, ResolverPlugin, SelectionPlugin));
    app
}

/// Insert a job whose messages the test sends itself
fn insert_manual_job(app: &mut App) -> Sender<FetchMessage> {
    let (sender, receiver) = crossbeam_channel::unbounded();
    app.insert_resource(FetchJob::new(receiver));
    sender
}

fn status(app: &App) -> StatusLine {
    app.world().resource::<StatusLine>().clone()
}

fn is_spinning(app: &App) -> bool {
    app.world().resource::<WheelState>().is_spinning()
}

#[test]
fn test_progress_updates_status_line() {
    //! Progress messages show up as info text while the job stays alive
    let mut app = test_app();
    let sender = insert_manual_job(&mut app);

    sender
        .send(FetchMessage::Progress(ResolveProgress::LookingUpGame {
            handle: "magnus".to_string(),
        }))
        .expect("send");
    app.update();

    let status = status(&app);
    assert!(!status.is_error);
    assert!(status.text.contains("magnus"));
    assert!(app.world().contains_resource::<FetchJob>());
}

#[test]
fn test_position_starts_spin() {
    //! A fetched position with legal moves ends the job and starts a spin
    let mut app = test_app();
    let sender = insert_manual_job(&mut app);

    sender
        .send(FetchMessage::Finished(Ok(PositionString::new(START_FEN))))
        .expect("send");
    app.update();
    assert!(!app.world().contains_resource::<FetchJob>());

    // The spin request is picked up at the latest one frame later.
    app.update();
    assert!(is_spinning(&app));

    let mut labels: Vec<String> = app
        .world()
        .resource::<WheelState>()
        .markers()
        .iter()
        .map(|marker| marker.label.clone())
        .collect();
    labels.sort();
    assert_eq!(labels, vec!["At".to_string(), "Piyon".to_string()]);
    assert_eq!(status(&app).text, "The wheel is turning...");
}

#[test]
fn test_checkmate_reports_no_movable_piece() {
    let mut app = test_app();
    let sender = insert_manual_job(&mut app);

    sender
        .send(FetchMessage::Finished(Ok(PositionString::new(FOOLS_MATE_FEN))))
        .expect("send");
    app.update();
    app.update();

    let status = status(&app);
    assert_eq!(status.text, NO_MOVABLE_PIECE);
    assert!(!status.is_error);
    assert!(!is_spinning(&app));

    let outcome = app.world().resource::<SpinOutcome>();
    assert_eq!(outcome.result, None);
    assert_eq!(outcome.headline().as_deref(), Some(NO_MOVABLE_PIECE));
}

#[test]
fn test_resolve_error_is_shown() {
    let mut app = test_app();
    let sender = insert_manual_job(&mut app);

    let error = ResolveError::NoActiveGame {
        handle: "magnus".to_string(),
    };
    sender
        .send(FetchMessage::Finished(Err(error.clone())))
        .expect("send");
    app.update();

    let status = status(&app);
    assert!(status.is_error);
    assert_eq!(status.text, error.to_string());
    assert!(!app.world().contains_resource::<FetchJob>());
    assert!(!is_spinning(&app));
}

#[test]
fn test_invalid_position_is_shown() {
    let mut app = test_app();
    let sender = insert_manual_job(&mut app);

    sender
        .send(FetchMessage::Finished(Ok(PositionString::new("not a position"))))
        .expect("send");
    app.update();

    assert!(status(&app).is_error);
    assert!(!is_spinning(&app));
}

#[test]
fn test_vanished_fetch_thread_ends_job() {
    let mut app = test_app();
    let sender = insert_manual_job(&mut app);
    drop(sender);

    app.update();

    assert!(status(&app).is_error);
    assert!(!app.world().contains_resource::<FetchJob>());
}

#[test]
fn test_empty_handle_never_starts_job() {
    let mut app = test_app();
    app.world_mut().write_message(FetchRequested {
        handle: "   ".to_string(),
    });
    app.update();

    let status = status(&app);
    assert!(status.is_error);
    assert_eq!(status.text, ResolveError::EmptyHandle.to_string());
    assert!(!app.world().contains_resource::<FetchJob>());
}

#[test]
fn test_request_ignored_while_fetch_outstanding() {
    let mut app = test_app();
    let _sender = insert_manual_job(&mut app);
    let before = status(&app);

    app.world_mut().write_message(FetchRequested {
        handle: "magnus".to_string(),
    });
    app.update();

    assert_eq!(status(&app), before);
    assert!(app.world().contains_resource::<FetchJob>());
}

/// Serves a fixed game over the [`GameSource`] interface
struct CannedGame;

impl GameSource for CannedGame {
    fn current_game(&self, _handle: &str) -> ResolveResult<String> {
        Ok("[Event \"Rated blitz game\"]\n[GameId \"q7ZvsdUF\"]\n\n1. e4 *".to_string())
    }

    fn game_page(&self, _game_id: &str) -> ResolveResult<String> {
        Ok(format!(
            r#"<html><script id="page-init-data" type="application/json">{{"game":{{"fen":"{START_FEN}"}}}}</script></html>"#
        ))
    }
}

#[test]
fn test_spawned_fetch_reaches_the_wheel() {
    //! End to end through the fetch thread with a canned source
    let mut app = test_app();
    let job = spawn_fetch(Resolver::new(CannedGame), "magnus".to_string()).expect("spawn");
    app.insert_resource(job);

    for _ in 0..200 {
        app.update();
        if !app.world().contains_resource::<FetchJob>() {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    app.update();

    assert!(!app.world().contains_resource::<FetchJob>());
    assert!(is_spinning(&app));
}
