//! Season HUD panel.
//!
//! Small egui window listing the committed season, the blend in progress and
//! an "Advance season" button. F3 toggles it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::{AdvanceSeasonRequest, GroundSeasons};
use seasons::Season;

// =============================================================================
// Resources
// =============================================================================

/// Whether the season panel is visible.
#[derive(Resource)]
pub struct SeasonPanelVisible(pub bool);

impl Default for SeasonPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

// =============================================================================
// Pure helpers
// =============================================================================

/// Status line for the panel heading.
pub fn season_status_label(current: Season, target: Option<Season>, progress: f32) -> String {
    match target {
        Some(next) => format!("{current} -> {next} ({:.0}%)", progress * 100.0),
        None => current.to_string(),
    }
}

pub fn normal_maps_label(enabled: bool) -> &'static str {
    if enabled {
        "Normal maps: on"
    } else {
        "Normal maps: off"
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn season_panel_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<SeasonPanelVisible>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::F3) {
        visible.0 = !visible.0;
    }
}

pub fn season_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<SeasonPanelVisible>,
    ground: Option<Res<GroundSeasons>>,
    mut requests: EventWriter<AdvanceSeasonRequest>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("Seasons")
        .open(&mut open)
        .resizable(false)
        .default_width(220.0)
        .show(contexts.ctx_mut(), |ui| {
            let Some(ground) = ground.as_ref() else {
                ui.label("Starting...");
                return;
            };
            let switcher = ground.switcher();
            if !switcher.is_enabled() {
                ui.colored_label(egui::Color32::LIGHT_RED, "Ground surface not assigned");
                return;
            }

            ui.heading(season_status_label(
                switcher.current(),
                switcher.target(),
                switcher.progress(),
            ));
            ui.add(egui::ProgressBar::new(switcher.progress()).show_percentage());
            ui.label(format!("Blend time: {:.1}s", switcher.blend_duration()));
            ui.label(normal_maps_label(switcher.uses_normals()));

            ui.separator();
            let button = ui.add_enabled(
                !switcher.is_transitioning(),
                egui::Button::new("Advance season"),
            );
            if button.clicked() {
                requests.send(AdvanceSeasonRequest);
            }
        });

    if !open {
        visible.0 = false;
    }
}
