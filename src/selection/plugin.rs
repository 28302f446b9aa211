//! Selection plugin - drives the wheel from the main schedule
//!
//! # Flow
//!
//! 1. Something writes a [`SpinRequested`] message (the resolver after a
//!    successful fetch)
//! 2. [`begin_spin_system`] starts the spin unless one is already running
//! 3. [`advance_spin_system`] samples the wheel every [`TICK_INTERVAL`] while
//!    the spin is in progress
//! 4. On landing the result is stored in [`SpinOutcome`] and the status line
//!    is updated
//!
//! The cadence system is gated on [`spin_in_progress`], so an idle wheel costs
//! nothing and clearing the busy flag is all it takes to stop it.

use super::wheel::{SpinPlan, SpinResult, SpinTick, WheelState, TICK_INTERVAL};
use super::LabelTable;
use crate::core::{StatusLine, WheelSettings};
use bevy::prelude::*;
use shakmaty::Color;
use web_time::Instant;

/// Request to spin the wheel over a set of labels
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct SpinRequested {
    pub side: Color,
    pub labels: Vec<String>,
    /// Table the labels were written with; the result line uses it too
    pub words: LabelTable,
}

/// What the result line shows, kept until the next spin starts
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SpinOutcome {
    /// Last finished spin
    pub result: Option<SpinResult>,
    /// Side and piece words of the spin that produced `result`
    pub words: LabelTable,
    /// Message shown instead of a result when no spin could be made
    pub notice: Option<String>,
}

impl SpinOutcome {
    /// Forget the previous result and notice
    pub fn clear(&mut self) {
        self.result = None;
        self.notice = None;
    }

    /// Text for the result line, e.g. "BEYAZ TAŞ: AT"
    pub fn headline(&self) -> Option<String> {
        if let Some(notice) = &self.notice {
            return Some(notice.clone());
        }
        let result = self.result.as_ref()?;
        Some(match &result.winner {
            Ok(label) => format!(
                "{} {}: {}",
                self.words.side(result.side).to_uppercase(),
                self.words.piece.to_uppercase(),
                label.to_uppercase()
            ),
            Err(err) => err.to_string(),
        })
    }
}

/// Sampling cadence for a running spin
#[derive(Resource)]
pub struct SpinCadence {
    pub timer: Timer,
}

impl Default for SpinCadence {
    fn default() -> Self {
        Self {
            timer: Timer::new(TICK_INTERVAL, TimerMode::Repeating),
        }
    }
}

/// Plugin for the wheel spin
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WheelState>()
            .init_resource::<SpinOutcome>()
            .init_resource::<SpinCadence>()
            .add_message::<SpinRequested>()
            .add_systems(
                Update,
                (
                    begin_spin_system,
                    advance_spin_system.run_if(spin_in_progress),
                )
                    .chain(),
            );
    }
}

/// Run condition: true while the wheel is turning
pub fn spin_in_progress(wheel: Res<WheelState>) -> bool {
    wheel.is_spinning()
}

/// Start a spin for each request; requests during a spin are dropped
pub fn begin_spin_system(
    mut requests: MessageReader<SpinRequested>,
    mut wheel: ResMut<WheelState>,
    mut outcome: ResMut<SpinOutcome>,
    mut cadence: ResMut<SpinCadence>,
    mut status: ResMut<StatusLine>,
    settings: Res<WheelSettings>,
) {
    for request in requests.read() {
        if wheel.is_spinning() {
            debug!("[WHEEL] Spin already in progress, ignoring request");
            continue;
        }

        let plan = SpinPlan::draw(&mut rand::rng());
        let duration = settings.spin_duration();
        wheel.start(&request.labels, request.side, duration, plan, Instant::now());
        outcome.clear();
        outcome.words = request.words.clone();
        cadence.timer.reset();

        info!(
            "[WHEEL] Spinning {:?} over {} labels for {:?} ({:.0}°)",
            request.side,
            request.labels.len(),
            duration,
            plan.total_rotation
        );
        status.set_info("The wheel is turning...");
    }
}

/// Sample the wheel on the fixed cadence and publish the landing
pub fn advance_spin_system(
    time: Res<Time>,
    mut cadence: ResMut<SpinCadence>,
    mut wheel: ResMut<WheelState>,
    mut outcome: ResMut<SpinOutcome>,
    mut status: ResMut<StatusLine>,
) {
    cadence.timer.tick(time.delta());
    if !cadence.timer.just_finished() {
        return;
    }

    match wheel.tick(Instant::now()) {
        SpinTick::Idle | SpinTick::Turning { .. } => {}
        SpinTick::Landed(result) => {
            match &result.winner {
                Ok(label) => {
                    info!("[WHEEL] Landed on {} at {:.1}°", label, result.final_angle);
                    status.set_info(format!("The wheel picked: {label}"));
                }
                Err(err) => {
                    warn!("[WHEEL] Landed without a result: {}", err);
                    status.set_error(err.to_string());
                }
            }
            outcome.result = Some(result);
        }
    }
}
