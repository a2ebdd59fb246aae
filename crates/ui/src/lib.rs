use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod season_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<season_panel::SeasonPanelVisible>()
            .add_systems(
                Update,
                (
                    season_panel::season_panel_keybind,
                    season_panel::season_panel_ui,
                )
                    .before(rendering::SeasonSwitcherSet),
            );
    }
}
