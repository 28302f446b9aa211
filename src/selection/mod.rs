//! Selection engine - which piece to move next
//!
//! Two halves:
//!
//! - [`pieces`] turns a position string into the ordered set of piece labels
//!   the side to move can legally move.
//! - [`wheel`] spins those labels around a wheel and picks the one that stops
//!   nearest the pointer, with [`easing`] shaping the spin and [`cache`]
//!   keeping rotated renders around.
//!
//! [`SelectionPlugin`] runs the spin on the main schedule.

pub mod cache;
pub mod easing;
pub mod pieces;
pub mod plugin;
pub mod wheel;

pub use cache::{bucket_key, RotationCache};
pub use easing::ease_spin;
pub use pieces::{enumerate_movable_pieces, parse_position, LabelTable, MovablePieces};
pub use plugin::{spin_in_progress, SelectionPlugin, SpinCadence, SpinOutcome, SpinRequested};
pub use wheel::{
    place_markers, resolve_winner, PieceMarker, SpinPlan, SpinResult, SpinTick, WheelGeometry,
    WheelState, TICK_INTERVAL,
};
