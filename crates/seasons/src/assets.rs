//! Per-season texture sets.
//!
//! `SeasonAssets<T>` is generic over the texture reference type so the same
//! table holds asset paths in the settings file and loaded image handles at
//! runtime.

use serde::{Deserialize, Serialize};

use crate::season::Season;

/// The textures shown for one season. Either slot may be unset, in which case
/// the renderer receives its default texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonAssetSet<T> {
    pub albedo: Option<T>,
    pub normal: Option<T>,
}

impl<T> Default for SeasonAssetSet<T> {
    fn default() -> Self {
        Self {
            albedo: None,
            normal: None,
        }
    }
}

impl<T> SeasonAssetSet<T> {
    pub fn new(albedo: Option<T>, normal: Option<T>) -> Self {
        Self { albedo, normal }
    }

    /// Convert both slots, with separate conversions for albedo and normal.
    pub fn map_slots<U>(
        &self,
        albedo: impl FnOnce(&T) -> U,
        normal: impl FnOnce(&T) -> U,
    ) -> SeasonAssetSet<U> {
        SeasonAssetSet {
            albedo: self.albedo.as_ref().map(albedo),
            normal: self.normal.as_ref().map(normal),
        }
    }
}

/// One `SeasonAssetSet` per season. Immutable once handed to the switcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonAssets<T> {
    pub winter: SeasonAssetSet<T>,
    pub spring: SeasonAssetSet<T>,
    pub summer: SeasonAssetSet<T>,
    pub autumn: SeasonAssetSet<T>,
}

impl<T> Default for SeasonAssets<T> {
    fn default() -> Self {
        Self {
            winter: SeasonAssetSet::default(),
            spring: SeasonAssetSet::default(),
            summer: SeasonAssetSet::default(),
            autumn: SeasonAssetSet::default(),
        }
    }
}

impl<T> SeasonAssets<T> {
    pub fn get(&self, season: Season) -> &SeasonAssetSet<T> {
        match season {
            Season::Winter => &self.winter,
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
        }
    }

    pub fn albedo(&self, season: Season) -> Option<&T> {
        self.get(season).albedo.as_ref()
    }

    pub fn normal(&self, season: Season) -> Option<&T> {
        self.get(season).normal.as_ref()
    }

    /// Convert every texture reference, e.g. asset paths into loaded handles.
    /// Normal maps get their own function so they can be loaded as linear
    /// textures.
    pub fn map_slots<U>(
        &self,
        mut albedo: impl FnMut(&T) -> U,
        mut normal: impl FnMut(&T) -> U,
    ) -> SeasonAssets<U> {
        SeasonAssets {
            winter: self.winter.map_slots(&mut albedo, &mut normal),
            spring: self.spring.map_slots(&mut albedo, &mut normal),
            summer: self.summer.map_slots(&mut albedo, &mut normal),
            autumn: self.autumn.map_slots(&mut albedo, &mut normal),
        }
    }
}
