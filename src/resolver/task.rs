//! Background fetch job
//!
//! The resolver blocks on the network, so it runs on its own thread, and so
//! does building the HTTP client. The thread never touches ECS state: it sends [`FetchMessage`]s over a channel
//! and [`poll_fetch_system`] applies them on the main schedule.
//!
//! At most one job exists at a time. While the [`FetchJob`] resource is
//! present, further [`FetchRequested`] messages are dropped.

use super::{
    validate_handle, GameSource, LichessClient, PositionString, ResolveProgress, Resolver,
    ResolverConfig,
};
use crate::core::{ResolveResult, StatusLine, WheelSettings};
use crate::selection::{enumerate_movable_pieces, SpinOutcome, SpinRequested};
use bevy::prelude::*;
use crossbeam_channel::{Receiver, TryRecvError};
use std::io;
use std::thread;

/// Shown when the side to move has no legal move
pub const NO_MOVABLE_PIECE: &str = "No piece can move in this position!";

/// Messages from the fetch thread to the main thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMessage {
    Progress(ResolveProgress),
    Finished(ResolveResult<PositionString>),
}

/// The outstanding fetch, if any
#[derive(Resource)]
pub struct FetchJob {
    receiver: Receiver<FetchMessage>,
}

impl FetchJob {
    pub fn new(receiver: Receiver<FetchMessage>) -> Self {
        Self { receiver }
    }
}

/// Request to fetch the live position for a handle and spin on it
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct FetchRequested {
    pub handle: String,
}

/// Plugin for the background position fetch
pub struct ResolverPlugin;

impl Plugin for ResolverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResolverConfig>()
            .add_message::<FetchRequested>()
            .add_systems(
                Update,
                (
                    start_fetch_system,
                    poll_fetch_system.run_if(resource_exists::<FetchJob>),
                )
                    .chain(),
            );
    }
}

/// Run `resolver` for `handle` on a detached thread
///
/// The thread is never joined; it ends after sending
/// [`FetchMessage::Finished`].
pub fn spawn_fetch<S>(resolver: Resolver<S>, handle: String) -> io::Result<FetchJob>
where
    S: GameSource + Send + 'static,
{
    spawn_with(move || Ok(resolver), handle)
}

/// Fetch from Lichess; the HTTP client is built on the fetch thread
pub fn spawn_lichess_fetch(config: ResolverConfig, handle: String) -> io::Result<FetchJob> {
    spawn_with(move || LichessClient::new(config).map(Resolver::new), handle)
}

fn spawn_with<S, F>(build: F, handle: String) -> io::Result<FetchJob>
where
    S: GameSource,
    F: FnOnce() -> ResolveResult<Resolver<S>> + Send + 'static,
{
    let (sender, receiver) = crossbeam_channel::unbounded();

    thread::Builder::new()
        .name("position-resolver".to_string())
        .spawn(move || {
            let result = build().and_then(|resolver| {
                resolver.resolve(&handle, |step| {
                    let _ = sender.send(FetchMessage::Progress(step));
                })
            });
            // Receiver gone means the app is shutting down.
            let _ = sender.send(FetchMessage::Finished(result));
        })?;

    Ok(FetchJob::new(receiver))
}

/// Start a fetch for the first request when no job is outstanding
pub fn start_fetch_system(
    mut commands: Commands,
    mut requests: MessageReader<FetchRequested>,
    job: Option<Res<FetchJob>>,
    config: Res<ResolverConfig>,
    mut status: ResMut<StatusLine>,
) {
    let mut outstanding = job.is_some();

    for request in requests.read() {
        if outstanding {
            warn!(
                "[FETCH] A fetch is already running, ignoring request for {}",
                request.handle
            );
            continue;
        }

        let handle = match validate_handle(&request.handle) {
            Ok(handle) => handle.to_string(),
            Err(err) => {
                status.set_error(err.to_string());
                continue;
            }
        };

        match spawn_lichess_fetch(config.clone(), handle.clone()) {
            Ok(new_job) => {
                info!("[FETCH] Fetching live position for {}", handle);
                status.set_info(format!("Fetching game data for {handle}..."));
                commands.insert_resource(new_job);
                outstanding = true;
            }
            Err(err) => {
                error!("[FETCH] Could not start fetch thread: {}", err);
                status.set_error(format!("Could not start the fetch: {err}"));
            }
        }
    }
}

/// Apply everything the fetch thread has sent so far
pub fn poll_fetch_system(
    mut commands: Commands,
    job: Res<FetchJob>,
    settings: Res<WheelSettings>,
    mut status: ResMut<StatusLine>,
    mut outcome: ResMut<SpinOutcome>,
    mut spins: MessageWriter<SpinRequested>,
) {
    loop {
        match job.receiver.try_recv() {
            Ok(FetchMessage::Progress(step)) => status.set_info(step.to_string()),
            Ok(FetchMessage::Finished(result)) => {
                commands.remove_resource::<FetchJob>();
                hand_off_position(result, &settings, &mut status, &mut outcome, &mut spins);
                return;
            }
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                error!("[FETCH] Fetch thread ended without a result");
                commands.remove_resource::<FetchJob>();
                status.set_error("The fetch stopped unexpectedly. Please try again.");
                return;
            }
        }
    }
}

/// Turn a fetched position into a spin request, or report why not
fn hand_off_position(
    result: ResolveResult<PositionString>,
    settings: &WheelSettings,
    status: &mut StatusLine,
    outcome: &mut SpinOutcome,
    spins: &mut MessageWriter<SpinRequested>,
) {
    let position = match result {
        Ok(position) => position,
        Err(err) => {
            warn!("[FETCH] {}", err);
            status.set_error(err.to_string());
            return;
        }
    };

    let labels = settings.labels();
    match enumerate_movable_pieces(&position, &labels) {
        Ok(movable) if movable.is_empty() => {
            info!("[FETCH] No legal move in {}", position);
            outcome.clear();
            outcome.notice = Some(NO_MOVABLE_PIECE.to_string());
            status.set_info(NO_MOVABLE_PIECE);
        }
        Ok(movable) => {
            debug!(
                "[FETCH] {} to move, movable: {:?}",
                labels.side(movable.side),
                movable.labels
            );
            spins.write(SpinRequested {
                side: movable.side,
                labels: movable.labels,
                words: labels,
            });
        }
        Err(err) => {
            warn!("[FETCH] {}", err);
            status.set_error(err.to_string());
        }
    }
}
