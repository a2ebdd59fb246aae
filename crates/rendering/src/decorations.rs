//! Seasonal vegetation toggled through `Visibility`.

use bevy::prelude::*;

use seasons::{DecorationKind, DecorationToggle};

/// Tags a decoration root (grass, flowers, leaf litter) with the season group
/// it belongs to. Any number of entities may share a group.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonDecoration(pub DecorationKind);

pub fn visibility_for(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// `DecorationToggle` over every `SeasonDecoration` entity in the world.
pub struct VisibilityDecorations<'q, 'w, 's> {
    pub query: &'q mut Query<'w, 's, (&'static SeasonDecoration, &'static mut Visibility)>,
}

impl DecorationToggle for VisibilityDecorations<'_, '_, '_> {
    fn set_visible(&mut self, kind: DecorationKind, visible: bool) {
        let target = visibility_for(visible);
        for (decoration, mut visibility) in self.query.iter_mut() {
            if decoration.0 == kind {
                *visibility = target;
            }
        }
    }
}
