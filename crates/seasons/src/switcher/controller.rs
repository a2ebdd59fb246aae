//! `SeasonSwitcher`: owns the current season and drives the timed ground
//! blend when the advance trigger fires.

use bevy::prelude::*;

use crate::assets::SeasonAssets;
use crate::decoration::{apply_decoration_changes, DecorationToggle};
use crate::season::Season;
use crate::settings::SeasonSwitcherSettings;
use crate::surface::{ScalarSlot, SurfaceProperties, TextureSlot};
use crate::transition::{BlendStep, BlendTransition};

use super::error::SwitcherError;

// =============================================================================
// State
// =============================================================================

/// Lifecycle of the switcher. `Disabled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherStatus {
    Uninitialized,
    Active,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Blending(BlendTransition),
}

/// Notable state changes returned from `SeasonSwitcher::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherEvent {
    /// The trigger was accepted and a blend from `from` to `to` began.
    Started { from: Season, to: Season },
    /// A blend finished and `season` is now current.
    Committed { season: Season },
}

/// Cross-fades a ground surface through the season cycle.
#[derive(Debug, Clone)]
pub struct SeasonSwitcher<T> {
    assets: SeasonAssets<T>,
    blend_duration: f32,
    use_normals: bool,
    current: Season,
    phase: Phase,
    blend: f32,
    status: SwitcherStatus,
}

impl<T> SeasonSwitcher<T> {
    pub fn new(assets: SeasonAssets<T>, blend_duration_secs: f32, use_normals: bool) -> Self {
        Self {
            assets,
            blend_duration: blend_duration_secs,
            use_normals,
            current: Season::Winter,
            phase: Phase::Idle,
            blend: 0.0,
            status: SwitcherStatus::Uninitialized,
        }
    }

    pub fn from_settings(settings: &SeasonSwitcherSettings, assets: SeasonAssets<T>) -> Self {
        Self::new(assets, settings.blend_duration_secs, settings.use_normals)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The committed season. Does not change until a blend completes.
    pub fn current(&self) -> Season {
        self.current
    }

    /// Season being blended to, if a transition is running.
    pub fn target(&self) -> Option<Season> {
        match self.phase {
            Phase::Idle => None,
            Phase::Blending(transition) => Some(transition.to),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Blending(_))
    }

    /// Blend factor last written to the surface (0 when idle).
    pub fn progress(&self) -> f32 {
        self.blend
    }

    pub fn status(&self) -> SwitcherStatus {
        self.status
    }

    pub fn is_enabled(&self) -> bool {
        self.status == SwitcherStatus::Active
    }

    pub fn blend_duration(&self) -> f32 {
        self.blend_duration
    }

    pub fn uses_normals(&self) -> bool {
        self.use_normals
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Write the starting season to `surface`.
    ///
    /// Without a surface the switcher logs an error and disables itself for
    /// the rest of the session; later calls (including `initialize`) are
    /// no-ops.
    pub fn initialize<S>(&mut self, surface: Option<&mut S>) -> Result<(), SwitcherError>
    where
        S: SurfaceProperties<Texture = T>,
    {
        if self.status == SwitcherStatus::Disabled {
            return Err(SwitcherError::Disabled);
        }
        let Some(surface) = surface else {
            error!("SeasonSwitcher: Ground surface not assigned.");
            self.status = SwitcherStatus::Disabled;
            return Err(SwitcherError::MissingSurface);
        };

        self.write_slot_a(surface, self.current);
        self.write_blend(surface, 0.0);
        surface.commit();
        self.status = SwitcherStatus::Active;
        Ok(())
    }

    /// Advance one frame.
    ///
    /// `trigger_pressed` must be true only on the frame the advance trigger
    /// goes down. It is ignored while a blend is running.
    pub fn update<S, D>(
        &mut self,
        trigger_pressed: bool,
        delta_secs: f32,
        surface: &mut S,
        decorations: &mut D,
    ) -> Option<SwitcherEvent>
    where
        S: SurfaceProperties<Texture = T>,
        D: DecorationToggle,
    {
        if self.status != SwitcherStatus::Active {
            return None;
        }

        match self.phase {
            Phase::Idle if trigger_pressed => Some(self.begin(surface, decorations)),
            Phase::Idle => None,
            Phase::Blending(mut transition) => {
                let step = transition.advance(delta_secs);
                self.phase = Phase::Blending(transition);
                match step {
                    BlendStep::Progress(k) => {
                        self.write_blend(surface, k);
                        surface.commit();
                        None
                    }
                    BlendStep::Complete => {
                        self.write_blend(surface, 1.0);
                        surface.commit();
                        Some(self.finish(surface, transition.to))
                    }
                }
            }
        }
    }

    fn begin<S, D>(&mut self, surface: &mut S, decorations: &mut D) -> SwitcherEvent
    where
        S: SurfaceProperties<Texture = T>,
        D: DecorationToggle,
    {
        let from = self.current;
        let to = from.next();
        info!("SeasonSwitcher: advance pressed, switching season {from} -> {to}.");
        debug!(
            "SeasonSwitcher: {} = {from}, {} = {to}, {} = 0",
            TextureSlot::SeasonA.shader_name(),
            TextureSlot::SeasonB.shader_name(),
            ScalarSlot::Blend.shader_name(),
        );

        apply_decoration_changes(from, decorations);

        self.write_slot_a(surface, from);
        self.write_slot_b(surface, to);
        self.write_blend(surface, 0.0);
        surface.commit();

        self.phase = Phase::Blending(BlendTransition::new(from, to, self.blend_duration));
        SwitcherEvent::Started { from, to }
    }

    fn finish<S>(&mut self, surface: &mut S, next: Season) -> SwitcherEvent
    where
        S: SurfaceProperties<Texture = T>,
    {
        self.current = next;
        self.write_slot_a(surface, next);
        self.write_blend(surface, 0.0);
        surface.commit();
        self.phase = Phase::Idle;
        SwitcherEvent::Committed { season: next }
    }

    fn write_blend<S>(&mut self, surface: &mut S, value: f32)
    where
        S: SurfaceProperties<Texture = T>,
    {
        self.blend = value;
        surface.set_scalar(ScalarSlot::Blend, value);
    }

    fn write_slot_a<S>(&self, surface: &mut S, season: Season)
    where
        S: SurfaceProperties<Texture = T>,
    {
        surface.set_texture(TextureSlot::SeasonA, self.assets.albedo(season));
        if self.use_normals {
            surface.set_texture(TextureSlot::NormalA, self.assets.normal(season));
        }
    }

    fn write_slot_b<S>(&self, surface: &mut S, season: Season)
    where
        S: SurfaceProperties<Texture = T>,
    {
        surface.set_texture(TextureSlot::SeasonB, self.assets.albedo(season));
        if self.use_normals {
            surface.set_texture(TextureSlot::NormalB, self.assets.normal(season));
        }
    }
}
