//! Season cycle and timed ground cross-fade, independent of any renderer.
//!
//! The switcher writes blend parameters through `SurfaceProperties` and
//! toggles seasonal vegetation through `DecorationToggle`; the Bevy bindings
//! for both live in the `rendering` crate.

pub mod assets;
pub mod decoration;
pub mod season;
pub mod settings;
pub mod surface;
pub mod switcher;
pub mod transition;

pub use assets::{SeasonAssetSet, SeasonAssets};
pub use decoration::{decoration_changes, DecorationKind, DecorationToggle};
pub use season::Season;
pub use settings::{SeasonSwitcherSettings, SettingsError};
pub use surface::{ScalarSlot, SurfaceProperties, TextureSlot};
pub use switcher::{SeasonSwitcher, SwitcherError, SwitcherEvent, SwitcherStatus};
pub use transition::{BlendStep, BlendTransition};
