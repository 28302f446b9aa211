//! Window configuration resource
//!
//! Centralizes window settings for the application.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Smallest size the window may be resized to
    pub min_size: (f32, f32),
    /// Whether the window should be resizable
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dümen Dünyam - Chess Wheel".to_string(),
            width: 1280,
            height: 720,
            min_size: (800.0, 800.0),
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        let mut window = Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        };
        window.resize_constraints.min_width = self.min_size.0;
        window.resize_constraints.min_height = self.min_size.1;
        window
    }
}
