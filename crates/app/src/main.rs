use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::PresentMode;

use rendering::{SeasonGroundMaterialPlugin, SeasonSwitcherPlugin};
use seasons::SeasonSwitcherSettings;

mod scene;

/// Environment variable naming the settings file.
const SETTINGS_ENV: &str = "SEASON_SWITCHER_CONFIG";
const DEFAULT_SETTINGS_PATH: &str = "season_switcher.json";

fn main() {
    let settings_path = std::env::var(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Season Switcher".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    // After DefaultPlugins so the LogPlugin subscriber sees the load messages.
    app.insert_resource(SeasonSwitcherSettings::load_or_default(&settings_path))
        .add_plugins((
            SeasonGroundMaterialPlugin,
            SeasonSwitcherPlugin,
            ui::UiPlugin,
        ))
        .add_systems(Startup, scene::setup_scene);

    app.run();
}
