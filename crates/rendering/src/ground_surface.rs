//! Material-backed `SurfaceProperties` for the season ground.

use bevy::prelude::*;

use seasons::{ScalarSlot, SeasonSwitcher, SurfaceProperties, TextureSlot};

use crate::ground_material::{SeasonBlendExtension, SeasonGroundMaterial};

// =============================================================================
// Components
// =============================================================================

/// Marks the entity whose `MeshMaterial3d<SeasonGroundMaterial>` the switcher
/// drives. Exactly one is expected.
#[derive(Component, Debug, Default)]
pub struct SeasonGround;

// =============================================================================
// Resources
// =============================================================================

/// Loaded texture handles for each season.
#[derive(Resource, Debug, Clone, Default)]
pub struct SeasonTextures(pub seasons::SeasonAssets<Handle<Image>>);

/// The live switcher, its staged property block, and the material it writes.
///
/// `material` is `None` when no ground was found at startup; the switcher is
/// then disabled for the session.
#[derive(Resource)]
pub struct GroundSeasons {
    pub switcher: SeasonSwitcher<Handle<Image>>,
    pub block: SeasonBlendExtension,
    pub material: Option<Handle<SeasonGroundMaterial>>,
}

impl GroundSeasons {
    pub fn switcher(&self) -> &SeasonSwitcher<Handle<Image>> {
        &self.switcher
    }
}

// =============================================================================
// Surface
// =============================================================================

/// Stages writes in `block` and copies the whole block into the material's
/// extension on `commit`, so each commit is one asset mutation.
pub struct MaterialSurface<'a> {
    pub block: &'a mut SeasonBlendExtension,
    pub materials: &'a mut Assets<SeasonGroundMaterial>,
    pub handle: &'a Handle<SeasonGroundMaterial>,
}

impl SurfaceProperties for MaterialSurface<'_> {
    type Texture = Handle<Image>;

    fn set_texture(&mut self, slot: TextureSlot, texture: Option<&Handle<Image>>) {
        let texture = texture.cloned();
        let is_set = u32::from(texture.is_some());
        match slot {
            TextureSlot::SeasonA => self.block.season_a = texture,
            TextureSlot::SeasonB => self.block.season_b = texture,
            TextureSlot::NormalA => {
                self.block.normal_a = texture;
                self.block.params.normal_a_set = is_set;
            }
            TextureSlot::NormalB => {
                self.block.normal_b = texture;
                self.block.params.normal_b_set = is_set;
            }
        }
    }

    fn set_scalar(&mut self, slot: ScalarSlot, value: f32) {
        match slot {
            ScalarSlot::Blend => self.block.params.blend = value,
        }
    }

    fn commit(&mut self) {
        match self.materials.get_mut(self.handle) {
            Some(material) => material.extension = self.block.clone(),
            None => warn!("SeasonSwitcher: ground material asset is gone, skipping write"),
        }
    }
}
