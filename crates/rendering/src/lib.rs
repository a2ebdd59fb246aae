//! Bevy bindings for the season switcher.
//!
//! The ground is an entity tagged `SeasonGround` carrying a
//! `SeasonGroundMaterial`; seasonal vegetation roots carry `SeasonDecoration`.
//! `SeasonSwitcherPlugin` wires the switcher to keyboard input, frame time,
//! the material asset, and entity visibility. It runs headless;
//! `SeasonGroundMaterialPlugin` adds the render pipeline for the material.

use bevy::prelude::*;

pub mod decorations;
pub mod events;
pub mod ground_material;
pub mod ground_surface;
pub mod keybinding;
pub mod systems;

#[cfg(test)]
mod tests_systems;

pub use decorations::SeasonDecoration;
pub use events::{AdvanceSeasonRequest, SeasonCommitted, SeasonTransitionStarted};
pub use ground_material::{
    season_ground_material, SeasonBlendExtension, SeasonGroundMaterial,
    SeasonGroundMaterialPlugin,
};
pub use ground_surface::{GroundSeasons, SeasonGround, SeasonTextures};
pub use keybinding::SeasonKeyBinding;

use seasons::SeasonSwitcherSettings;

/// Ordering for switcher systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonSwitcherSet;

pub struct SeasonSwitcherPlugin;

impl Plugin for SeasonSwitcherPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeasonSwitcherSettings>()
            .init_resource::<SeasonKeyBinding>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<AdvanceSeasonRequest>()
            .add_event::<SeasonTransitionStarted>()
            .add_event::<SeasonCommitted>()
            .add_systems(Startup, systems::load_season_textures)
            .add_systems(PostStartup, systems::init_season_switcher)
            .add_systems(
                Update,
                systems::advance_season_switcher
                    .in_set(SeasonSwitcherSet)
                    .run_if(resource_exists::<GroundSeasons>),
            );
    }
}
