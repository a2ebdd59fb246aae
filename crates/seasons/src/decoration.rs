//! Seasonal decoration objects and the visibility table applied when leaving
//! a season.

use crate::season::Season;

/// The three decoration groups the switcher toggles. Winter has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Spring,
    Summer,
    Autumn,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 3] = [
        DecorationKind::Spring,
        DecorationKind::Summer,
        DecorationKind::Autumn,
    ];
}

/// Capability for showing or hiding externally-owned decoration objects.
pub trait DecorationToggle {
    fn set_visible(&mut self, kind: DecorationKind, visible: bool);
}

/// Visibility changes applied when the trigger is accepted in `departing`,
/// before the texture blend starts.
///
/// The table is asymmetric: a decoration is shown as soon as its season's
/// predecessor is left, and the Autumn group is only hidden when Autumn ends.
pub fn decoration_changes(departing: Season) -> &'static [(DecorationKind, bool)] {
    match departing {
        Season::Winter => &[(DecorationKind::Spring, true)],
        Season::Spring => &[(DecorationKind::Spring, false), (DecorationKind::Summer, true)],
        Season::Summer => &[(DecorationKind::Summer, false), (DecorationKind::Autumn, true)],
        Season::Autumn => &[(DecorationKind::Autumn, false)],
    }
}

/// Apply the changes for `departing` to `decorations`.
pub fn apply_decoration_changes(departing: Season, decorations: &mut impl DecorationToggle) {
    for &(kind, visible) in decoration_changes(departing) {
        decorations.set_visible(kind, visible);
    }
}
