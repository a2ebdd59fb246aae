//! The season transition controller.
//!
//! `SeasonSwitcher` owns the current season. When the advance trigger fires
//! while idle it toggles the seasonal decorations, loads the current and next
//! season into texture slots A and B, and then raises the blend factor from 0
//! to 1 over the configured duration, one `update` per frame. On completion
//! the next season is committed into slot A and the blend resets to 0.
//!
//! The controller only talks to the renderer and the scene through the
//! `SurfaceProperties` and `DecorationToggle` capabilities.

mod controller;
mod error;

#[cfg(test)]
mod test_support;

pub use controller::{SeasonSwitcher, SwitcherEvent, SwitcherStatus};
pub use error::SwitcherError;
