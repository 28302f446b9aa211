use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use dumen::core::WindowConfig;
use dumen::DumenPlugin;

const LOG_FILTER: &str = "info,dumen=debug,wgpu=error,naga=warn";

fn main() {
    let window_config = WindowConfig::default();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config.to_window()),
                    ..default()
                })
                .set(LogPlugin {
                    filter: LOG_FILTER.to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(DumenPlugin)
        .add_systems(Startup, setup_camera)
        .run();
}

/// egui draws through the primary window's camera
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
