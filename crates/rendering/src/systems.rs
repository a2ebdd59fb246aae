//! ECS systems driving the season switcher.

use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;

use seasons::{SeasonSwitcher, SeasonSwitcherSettings, SwitcherEvent};

use crate::decorations::{SeasonDecoration, VisibilityDecorations};
use crate::events::{AdvanceSeasonRequest, SeasonCommitted, SeasonTransitionStarted};
use crate::ground_material::{SeasonBlendExtension, SeasonGroundMaterial};
use crate::ground_surface::{GroundSeasons, MaterialSurface, SeasonGround, SeasonTextures};
use crate::keybinding::SeasonKeyBinding;

/// Load each season's textures from the paths in the settings. Normal maps
/// are loaded as linear data.
///
/// Skipped when `SeasonTextures` was inserted up front. Without an asset
/// server every slot stays unset.
pub fn load_season_textures(
    mut commands: Commands,
    settings: Res<SeasonSwitcherSettings>,
    asset_server: Option<Res<AssetServer>>,
    existing: Option<Res<SeasonTextures>>,
) {
    if existing.is_some() {
        return;
    }
    let textures = match asset_server {
        Some(server) => settings.textures.map_slots(
            |path| server.load::<Image>(path.clone()),
            |path| {
                server.load_with_settings(path.clone(), |s: &mut ImageLoaderSettings| {
                    s.is_srgb = false;
                })
            },
        ),
        None => {
            warn!("SeasonSwitcher: no asset server, season textures left unset");
            Default::default()
        }
    };
    commands.insert_resource(SeasonTextures(textures));
}

/// Create the switcher and write the starting season to the ground.
///
/// Runs once in `PostStartup`, after scene setup has spawned the ground. If
/// there is no single `SeasonGround` with a blend material the switcher is
/// created disabled.
pub fn init_season_switcher(
    mut commands: Commands,
    settings: Res<SeasonSwitcherSettings>,
    textures: Res<SeasonTextures>,
    ground: Query<&MeshMaterial3d<SeasonGroundMaterial>, With<SeasonGround>>,
    mut materials: ResMut<Assets<SeasonGroundMaterial>>,
) {
    let mut switcher = SeasonSwitcher::from_settings(&settings, textures.0.clone());
    let mut block = SeasonBlendExtension::new(settings.use_normals);
    let material = ground.get_single().ok().map(|m| m.0.clone());

    let mut surface = match material.as_ref() {
        Some(handle) => Some(MaterialSurface {
            block: &mut block,
            materials: &mut *materials,
            handle,
        }),
        None => None,
    };
    if let Err(e) = switcher.initialize(surface.as_mut()) {
        debug!("SeasonSwitcher: not running: {e}");
    }

    commands.insert_resource(GroundSeasons {
        switcher,
        block,
        material,
    });
}

/// Per-frame update: sample the trigger, advance the blend, and report
/// state changes as events.
#[allow(clippy::too_many_arguments)]
pub fn advance_season_switcher(
    keys: Res<ButtonInput<KeyCode>>,
    binding: Res<SeasonKeyBinding>,
    mut requests: EventReader<AdvanceSeasonRequest>,
    time: Res<Time>,
    mut ground: ResMut<GroundSeasons>,
    mut materials: ResMut<Assets<SeasonGroundMaterial>>,
    mut decorations: Query<(&'static SeasonDecoration, &'static mut Visibility)>,
    mut started: EventWriter<SeasonTransitionStarted>,
    mut committed: EventWriter<SeasonCommitted>,
) {
    // Drain requests every frame so they never pile up behind a running blend.
    let requested = requests.read().count() > 0;
    let pressed = binding.just_pressed(&keys) || requested;

    let GroundSeasons {
        switcher,
        block,
        material,
    } = &mut *ground;
    let Some(handle) = material.as_ref() else {
        return;
    };
    if !switcher.is_enabled() {
        return;
    }

    let mut surface = MaterialSurface {
        block,
        materials: &mut *materials,
        handle,
    };
    let mut toggles = VisibilityDecorations {
        query: &mut decorations,
    };

    match switcher.update(pressed, time.delta_secs(), &mut surface, &mut toggles) {
        Some(SwitcherEvent::Started { from, to }) => {
            started.send(SeasonTransitionStarted { from, to });
        }
        Some(SwitcherEvent::Committed { season }) => {
            committed.send(SeasonCommitted { season });
        }
        None => {}
    }
}
