//! Wheel spin state machine
//!
//! [`WheelState`] owns one spin at a time. A spin is a pure function of wall
//! clock time: [`WheelState::tick`] reads how long the spin has been running,
//! eases that into a rotation, and lands the wheel once the configured
//! duration has passed. Nothing here sleeps or schedules; the caller decides
//! how often to tick.
//!
//! Angles are in degrees and follow screen coordinates (y grows downward), so
//! a positive angle turns the wheel clockwise on screen. The pointer sits on
//! the positive x axis to the right of the rim.

use super::easing::ease_spin;
use crate::core::{SelectionError, SelectionResult};
use bevy::prelude::*;
use rand::Rng;
use shakmaty::Color;
use std::time::Duration;
use web_time::Instant;

/// Full turns every spin makes before the random remainder
pub const BASE_TURNS: f32 = 3.0;

/// How often a running spin is sampled (about 60 samples per second)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Where the wheel, its labels and the pointer sit on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Center of the wheel in canvas coordinates
    pub center: Vec2,
    /// Radius of the wheel disc
    pub wheel_radius: f32,
    /// Gap between the rim and the label ring
    pub label_margin: f32,
    /// Distance from the rim to the pointer
    pub pointer_offset: f32,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            center: Vec2::new(300.0, 300.0),
            wheel_radius: 150.0,
            label_margin: 40.0,
            pointer_offset: 100.0,
        }
    }
}

impl WheelGeometry {
    /// Radius of the circle the piece labels ride on
    pub fn label_radius(&self) -> f32 {
        self.wheel_radius + self.label_margin
    }

    /// Fixed pointer position the winner is measured against
    pub fn pointer(&self) -> Vec2 {
        self.center + Vec2::new(self.wheel_radius + self.pointer_offset, 0.0)
    }
}

/// One label riding on the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct PieceMarker {
    pub label: String,
    /// Placement angle at wheel angle zero
    pub base_angle: f32,
    /// Distance from the wheel center
    pub radius: f32,
}

impl PieceMarker {
    /// Absolute angle of this marker for a given wheel angle
    pub fn angle_at(&self, wheel_angle: f32) -> f32 {
        self.base_angle + wheel_angle
    }

    pub fn position(&self, center: Vec2, wheel_angle: f32) -> Vec2 {
        let radians = self.angle_at(wheel_angle).to_radians();
        center + Vec2::new(radians.cos(), radians.sin()) * self.radius
    }

    /// Rotation for the label text, in degrees counter-clockwise on screen
    pub fn text_rotation(&self, wheel_angle: f32) -> f32 {
        -self.angle_at(wheel_angle)
    }
}

/// Spread labels evenly around a circle, first label at angle zero
pub fn place_markers(labels: &[String], radius: f32) -> Vec<PieceMarker> {
    if labels.is_empty() {
        return Vec::new();
    }
    let spacing = 360.0 / labels.len() as f32;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| PieceMarker {
            label: label.clone(),
            base_angle: i as f32 * spacing,
            radius,
        })
        .collect()
}

/// Marker nearest to the pointer; ties go to the earliest marker
pub fn resolve_winner<'a>(
    markers: &'a [PieceMarker],
    geometry: &WheelGeometry,
    wheel_angle: f32,
) -> SelectionResult<&'a PieceMarker> {
    let pointer = geometry.pointer();
    let mut nearest: Option<(&PieceMarker, f32)> = None;

    for marker in markers {
        let distance = marker.position(geometry.center, wheel_angle).distance(pointer);
        if !distance.is_finite() {
            continue;
        }
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((marker, distance));
        }
    }

    nearest
        .map(|(marker, _)| marker)
        .ok_or(SelectionError::NoResult)
}

/// Randomness of one spin, drawn once when it starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Total rotation in degrees the wheel covers by the end of the spin
    pub total_rotation: f32,
}

impl SpinPlan {
    /// Between 3.1 and 3.9 full turns
    pub fn draw(rng: &mut impl Rng) -> Self {
        let remainder = rng.random::<f32>() * 0.8 + 0.1;
        Self::with_turns(BASE_TURNS + remainder)
    }

    pub fn with_turns(turns: f32) -> Self {
        Self {
            total_rotation: turns * 360.0,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    started_at: Instant,
    duration: Duration,
    plan: SpinPlan,
    side: Color,
}

/// How a spin ended
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    /// Side whose piece was picked
    pub side: Color,
    /// Winning label, or [`SelectionError::NoResult`]
    pub winner: SelectionResult<String>,
    /// Wheel angle the wheel stopped at
    pub final_angle: f32,
    /// Markers as they stood when the wheel stopped
    pub markers: Vec<PieceMarker>,
}

/// What one tick did
#[derive(Debug, Clone, PartialEq)]
pub enum SpinTick {
    /// No spin in progress
    Idle,
    /// Spin still running, wheel now at `angle`
    Turning { angle: f32 },
    /// Spin finished this tick
    Landed(SpinResult),
}

/// The wheel and its single in-flight spin
#[derive(Resource, Debug, Clone, Default)]
pub struct WheelState {
    geometry: WheelGeometry,
    markers: Vec<PieceMarker>,
    angle: f32,
    active: Option<ActiveSpin>,
}

impl WheelState {
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            geometry,
            ..default()
        }
    }

    /// True while a spin is in flight; new spins are refused meanwhile
    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn markers(&self) -> &[PieceMarker] {
        &self.markers
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Move the wheel center, e.g. after the canvas was resized
    ///
    /// Markers and pointer are relative to the center, so this never changes
    /// which marker wins.
    pub fn set_center(&mut self, center: Vec2) {
        self.geometry.center = center;
    }

    /// Start a spin. Returns `false` without touching any state if a spin is
    /// already running.
    pub fn start(
        &mut self,
        labels: &[String],
        side: Color,
        duration: Duration,
        plan: SpinPlan,
        now: Instant,
    ) -> bool {
        if self.is_spinning() {
            return false;
        }

        self.markers = place_markers(labels, self.geometry.label_radius());
        self.angle = 0.0;
        self.active = Some(ActiveSpin {
            started_at: now,
            duration,
            plan,
            side,
        });
        true
    }

    /// Advance the running spin to `now`
    pub fn tick(&mut self, now: Instant) -> SpinTick {
        let Some(active) = &self.active else {
            return SpinTick::Idle;
        };

        let elapsed = now.saturating_duration_since(active.started_at);
        if elapsed >= active.duration {
            return SpinTick::Landed(self.land());
        }

        let progress = elapsed.as_secs_f32() / active.duration.as_secs_f32();
        let angle = active.plan.total_rotation * ease_spin(progress);
        // Clock steps backwards must not turn the wheel back.
        self.angle = self.angle.max(angle);
        SpinTick::Turning { angle: self.angle }
    }

    fn land(&mut self) -> SpinResult {
        let side = self
            .active
            .take()
            .map(|active| active.side)
            .unwrap_or(Color::White);

        let winner =
            resolve_winner(&self.markers, &self.geometry, self.angle).map(|m| m.label.clone());

        SpinResult {
            side,
            winner,
            final_angle: self.angle,
            markers: std::mem::take(&mut self.markers),
        }
    }
}
