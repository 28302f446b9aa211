//! UI styling for the wheel window
//!
//! Centralizes colors, typography and button styles so every panel looks the
//! same.

pub mod colors;
pub mod components;
pub mod typography;

pub use colors::*;
pub use components::*;
pub use typography::*;
