//! Core plugin for Dümen Dünyam
//!
//! Provides fundamental application setup:
//! - Panic hook that reports what the app was doing when it crashed
//! - Window configuration
//! - Settings, handle and status line resources
//!
//! Add it before the resolver, selection and UI plugins; they all read the
//! resources initialized here.

use bevy::prelude::*;
use std::panic;
use std::sync::{Mutex, OnceLock};

use super::{PlayerHandle, StatusLine, WheelSettings, WindowConfig};
use crate::resolver::FetchJob;
use crate::selection::WheelState;

/// Activity snapshot read by the panic hook outside ECS context
static PANIC_STATE_TRACKER: OnceLock<Mutex<PanicStateInfo>> = OnceLock::new();

#[derive(Debug, Clone, Default)]
struct PanicStateInfo {
    spinning: bool,
    fetching: bool,
    status: String,
}

/// Core plugin for the application
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowConfig>()
            .init_resource::<WheelSettings>()
            .init_resource::<PlayerHandle>()
            .init_resource::<StatusLine>();

        app.register_type::<WindowConfig>()
            .register_type::<WheelSettings>();

        app.add_systems(Update, (log_status_changes, update_panic_state_tracker));
    }

    fn finish(&self, _app: &mut App) {
        setup_panic_hook();
    }
}

/// Install a panic hook that logs the message, location and app activity
fn setup_panic_hook() {
    PANIC_STATE_TRACKER.get_or_init(|| Mutex::new(PanicStateInfo::default()));

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<unknown>".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "<unknown>".to_string());

        let state = PANIC_STATE_TRACKER
            .get()
            .and_then(|tracker| tracker.lock().ok().map(|info| info.clone()))
            .unwrap_or_default();

        error!(
            "[PANIC] {} at {} (spinning: {}, fetching: {}, last status: {:?})",
            panic_msg, location, state.spinning, state.fetching, state.status
        );

        default_hook(panic_info);
    }));
}

/// Mirror status line changes into the log
fn log_status_changes(status: Res<StatusLine>) {
    if !status.is_changed() {
        return;
    }
    if status.is_error {
        warn!("[STATUS] {}", status.text);
    } else {
        info!("[STATUS] {}", status.text);
    }
}

fn update_panic_state_tracker(
    status: Res<StatusLine>,
    wheel: Option<Res<WheelState>>,
    job: Option<Res<FetchJob>>,
) {
    if let Some(tracker) = PANIC_STATE_TRACKER.get() {
        if let Ok(mut state_info) = tracker.lock() {
            state_info.spinning = wheel.map(|w| w.is_spinning()).unwrap_or(false);
            state_info.fetching = job.is_some();
            if status.is_changed() {
                state_info.status = status.text.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_plugin_initializes_resources() {
        //! All shared resources exist after the plugin is built
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.update();

        assert!(app.world().contains_resource::<WindowConfig>());
        assert!(app.world().contains_resource::<WheelSettings>());
        assert!(app.world().contains_resource::<PlayerHandle>());
        assert!(app.world().contains_resource::<StatusLine>());
    }
}
