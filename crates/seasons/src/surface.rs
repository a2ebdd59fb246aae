//! The rendering surface the switcher writes its blend parameters into.
//!
//! Slots are resolved once, as enum constants, so writes never look up a
//! property by name. The shader-side names are used in debug logging.

/// Texture slots of the blend property set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Albedo of the season being blended from (the committed season when idle).
    SeasonA,
    /// Albedo of the season being blended to.
    SeasonB,
    NormalA,
    NormalB,
}

impl TextureSlot {
    pub const fn shader_name(self) -> &'static str {
        match self {
            TextureSlot::SeasonA => "_SeasonA",
            TextureSlot::SeasonB => "_SeasonB",
            TextureSlot::NormalA => "_NormalA",
            TextureSlot::NormalB => "_NormalB",
        }
    }
}

/// Scalar slots of the blend property set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarSlot {
    /// Cross-fade factor in `[0, 1]`: 0 shows slot A, 1 shows slot B.
    Blend,
}

impl ScalarSlot {
    pub const fn shader_name(self) -> &'static str {
        match self {
            ScalarSlot::Blend => "_Blend",
        }
    }
}

/// Capability for a per-instance property set on a rendered surface.
///
/// `set_*` calls only stage values; `commit` pushes the full staged set to the
/// renderer in a single write.
pub trait SurfaceProperties {
    type Texture;

    /// Stage a texture for `slot`. `None` means "no texture" and the renderer
    /// falls back to its default.
    fn set_texture(&mut self, slot: TextureSlot, texture: Option<&Self::Texture>);

    fn set_scalar(&mut self, slot: ScalarSlot, value: f32);

    fn commit(&mut self);
}
