//! UI module - egui interface for the wheel
//!
//! - **wheel_panel**: username bar, wheel canvas, result line, spin button
//!   and the settings window
//! - **wheel_canvas**: painting the disc, the rotated labels and the pointer
//! - **styles**: shared colors, text styles and buttons
//!
//! All systems run in `EguiPrimaryContextPass`. They only read state and
//! write [`crate::resolver::FetchRequested`] messages; fetching and spinning
//! happen in the resolver and selection plugins.

pub mod styles;
pub mod system_params;
pub mod wheel_canvas;
pub mod wheel_panel;

pub use wheel_canvas::WheelArt;
pub use wheel_panel::{confirm_handle, spin_request, HandleInput, SettingsWindow};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin for the egui window contents
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HandleInput>()
            .init_resource::<SettingsWindow>()
            .init_resource::<WheelArt>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    wheel_panel::wheel_panel_system,
                    wheel_panel::settings_window_system,
                )
                    .chain(),
            );
    }
}
