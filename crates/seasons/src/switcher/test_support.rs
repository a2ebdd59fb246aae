//! Recording doubles for the surface and decoration capabilities.

use crate::assets::{SeasonAssetSet, SeasonAssets};
use crate::decoration::{DecorationKind, DecorationToggle};
use crate::surface::{ScalarSlot, SurfaceProperties, TextureSlot};

/// Snapshot of the full property set at one `commit`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Committed {
    pub season_a: Option<&'static str>,
    pub season_b: Option<&'static str>,
    pub normal_a: Option<&'static str>,
    pub normal_b: Option<&'static str>,
    pub blend: f32,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    staged: Committed,
    pub normal_writes: usize,
    pub commits: Vec<Committed>,
}

impl RecordingSurface {
    pub fn last(&self) -> Committed {
        self.commits.last().copied().unwrap_or_default()
    }

    pub fn blends(&self) -> Vec<f32> {
        self.commits.iter().map(|c| c.blend).collect()
    }
}

impl SurfaceProperties for RecordingSurface {
    type Texture = &'static str;

    fn set_texture(&mut self, slot: TextureSlot, texture: Option<&&'static str>) {
        let texture = texture.copied();
        match slot {
            TextureSlot::SeasonA => self.staged.season_a = texture,
            TextureSlot::SeasonB => self.staged.season_b = texture,
            TextureSlot::NormalA => {
                self.normal_writes += 1;
                self.staged.normal_a = texture;
            }
            TextureSlot::NormalB => {
                self.normal_writes += 1;
                self.staged.normal_b = texture;
            }
        }
    }

    fn set_scalar(&mut self, slot: ScalarSlot, value: f32) {
        match slot {
            ScalarSlot::Blend => self.staged.blend = value,
        }
    }

    fn commit(&mut self) {
        self.commits.push(self.staged);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDecorations {
    pub visible: [bool; 3],
    pub toggles: Vec<(DecorationKind, bool)>,
}

impl RecordingDecorations {
    pub fn is_visible(&self, kind: DecorationKind) -> bool {
        self.visible[kind as usize]
    }
}

impl DecorationToggle for RecordingDecorations {
    fn set_visible(&mut self, kind: DecorationKind, visible: bool) {
        self.visible[kind as usize] = visible;
        self.toggles.push((kind, visible));
    }
}

pub(crate) fn named_assets() -> SeasonAssets<&'static str> {
    SeasonAssets {
        winter: SeasonAssetSet::new(Some("winter_albedo"), Some("winter_normal")),
        spring: SeasonAssetSet::new(Some("spring_albedo"), Some("spring_normal")),
        summer: SeasonAssetSet::new(Some("summer_albedo"), Some("summer_normal")),
        autumn: SeasonAssetSet::new(Some("autumn_albedo"), None),
    }
}
