//! Key that fires the advance-season trigger.

use bevy::prelude::*;

/// The advance-season key plus required modifier state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonKeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl Default for SeasonKeyBinding {
    fn default() -> Self {
        Self::simple(KeyCode::Space)
    }
}

impl SeasonKeyBinding {
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// True only on the frame the key goes down with matching modifiers.
    pub fn just_pressed(&self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }
}
