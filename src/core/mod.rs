//! Core module - application infrastructure shared by every plugin
//!
//! # Resources
//!
//! - [`WindowConfig`] - Window settings configuration
//! - [`WheelSettings`] - Spin duration and label language
//! - [`PlayerHandle`] - The Lichess username the player confirmed
//! - [`StatusLine`] - Progress and error text shown to the player
//!
//! # Errors
//!
//! [`error::ResolveError`] and [`error::SelectionError`] cover every failure the
//! application reports. None of them is retried.

pub mod error;
pub mod plugin;
pub mod resources;
pub mod window_config;

pub use error::{ResolveError, ResolveResult, SelectionError, SelectionResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use window_config::WindowConfig;
