//! System parameter groups for UI systems
//!
//! Groups the resources the main panel reads and writes so the panel system
//! keeps a short signature.

use crate::core::{PlayerHandle, StatusLine, WheelSettings};
use crate::resolver::FetchJob;
use crate::selection::{SpinOutcome, WheelState};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Application state shown in the main panel
#[derive(SystemParam)]
pub struct WheelPanelParams<'w> {
    pub settings: Res<'w, WheelSettings>,
    pub handle: ResMut<'w, PlayerHandle>,
    pub status: ResMut<'w, StatusLine>,
    pub wheel: ResMut<'w, WheelState>,
    pub outcome: Res<'w, SpinOutcome>,
    /// Present while a position fetch is outstanding
    pub fetch: Option<Res<'w, FetchJob>>,
}

impl WheelPanelParams<'_> {
    /// True while a fetch or a spin is in flight
    pub fn is_busy(&self) -> bool {
        self.fetch.is_some() || self.wheel.is_spinning()
    }
}
