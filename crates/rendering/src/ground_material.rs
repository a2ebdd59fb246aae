//! Ground material that cross-fades between two season textures.
//!
//! Extends `StandardMaterial` so the ground keeps regular PBR lighting; the
//! extension multiplies the base color by `mix(season_a, season_b, blend)` and,
//! when enabled, swaps in the blended normal map.

// `ShaderType` derive emits per-field `check` fns at module scope that newer
// rustc flags as dead code.
#![allow(dead_code)]

use bevy::asset::load_internal_asset;
use bevy::pbr::{ExtendedMaterial, MaterialExtension};
use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};

pub const SEASON_GROUND_SHADER_HANDLE: Handle<Shader> =
    Handle::weak_from_u128(0x5ea5_0b1e_6d0c_4e2a_9f1b_7c3d_2a48_b0e1);

/// The full ground material type attached to the `SeasonGround` entity.
pub type SeasonGroundMaterial = ExtendedMaterial<StandardMaterial, SeasonBlendExtension>;

/// Scalar parameters of the blend. Exactly 16 bytes for WebGL2.
#[derive(Clone, Copy, Debug, Default, PartialEq, ShaderType, Reflect)]
pub struct SeasonBlendParams {
    /// 0 shows season A, 1 shows season B.
    pub blend: f32,
    /// Non-zero when normal maps are blended too.
    pub normals_enabled: u32,
    /// Non-zero when `normal_a` holds a texture; unset slots read as flat.
    pub normal_a_set: u32,
    /// Non-zero when `normal_b` holds a texture.
    pub normal_b_set: u32,
}

/// Per-instance season property set: slots A/B plus the blend factor.
///
/// Unset textures bind Bevy's fallback image.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default, PartialEq)]
pub struct SeasonBlendExtension {
    #[uniform(100)]
    pub params: SeasonBlendParams,

    #[texture(101, dimension = "2d")]
    #[sampler(102)]
    pub season_a: Option<Handle<Image>>,

    #[texture(103, dimension = "2d")]
    #[sampler(104)]
    pub season_b: Option<Handle<Image>>,

    #[texture(105, dimension = "2d")]
    #[sampler(106)]
    pub normal_a: Option<Handle<Image>>,

    #[texture(107, dimension = "2d")]
    #[sampler(108)]
    pub normal_b: Option<Handle<Image>>,
}

impl SeasonBlendExtension {
    pub fn new(use_normals: bool) -> Self {
        Self {
            params: SeasonBlendParams {
                normals_enabled: u32::from(use_normals),
                ..default()
            },
            ..default()
        }
    }
}

impl MaterialExtension for SeasonBlendExtension {
    fn fragment_shader() -> ShaderRef {
        SEASON_GROUND_SHADER_HANDLE.into()
    }

    fn deferred_fragment_shader() -> ShaderRef {
        SEASON_GROUND_SHADER_HANDLE.into()
    }
}

/// Build a ground material over `base`, with no season textures yet; the
/// switcher fills the slots at startup.
pub fn season_ground_material(base: StandardMaterial, use_normals: bool) -> SeasonGroundMaterial {
    ExtendedMaterial {
        base,
        extension: SeasonBlendExtension::new(use_normals),
    }
}

/// Registers the blend shader and the material pipeline. Needs the render
/// plugins, so headless apps add only `SeasonSwitcherPlugin`.
pub struct SeasonGroundMaterialPlugin;

impl Plugin for SeasonGroundMaterialPlugin {
    fn build(&self, app: &mut App) {
        load_internal_asset!(
            app,
            SEASON_GROUND_SHADER_HANDLE,
            "season_ground.wgsl",
            Shader::from_wgsl
        );
        app.add_plugins(MaterialPlugin::<SeasonGroundMaterial>::default());
    }
}
