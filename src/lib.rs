//! Dümen Dünyam - a chess piece picker wheel
//!
//! Looks up the live Lichess game of a player, lists the piece types that
//! have a legal move, and spins a wheel to pick one of them.
//!
//! - [`core`]: settings, status line, window config, errors, panic hook
//! - [`resolver`]: handle → current game → position, on a background thread
//! - [`selection`]: movable-piece enumeration and the wheel spin
//! - [`ui`]: the egui window

pub mod core;
pub mod resolver;
pub mod selection;
pub mod ui;

use bevy::prelude::*;

/// Every plugin of the application except windowing and egui itself
pub struct DumenPlugin;

impl Plugin for DumenPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            resolver::ResolverPlugin,
            selection::SelectionPlugin,
            ui::UiPlugin,
        ));
    }
}
