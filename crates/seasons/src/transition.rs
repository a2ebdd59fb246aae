//! Timed blend between two seasons, advanced once per frame by the caller.

use crate::season::Season;

/// Result of advancing a transition by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlendStep {
    /// Still running; carries the blend factor for this frame.
    Progress(f32),
    /// Elapsed time reached the duration this frame. The blend factor is 1.
    Complete,
}

/// An in-flight cross-fade from one season to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendTransition {
    pub from: Season,
    pub to: Season,
    elapsed: f32,
    duration: f32,
}

impl BlendTransition {
    pub fn new(from: Season, to: Season, duration_secs: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration_secs,
        }
    }

    /// Blend factor `clamp(elapsed / duration, 0, 1)`. A non-positive duration
    /// counts as already finished.
    pub fn fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Accumulate one frame of time. Negative deltas are ignored so elapsed
    /// never decreases.
    pub fn advance(&mut self, delta_secs: f32) -> BlendStep {
        self.elapsed += delta_secs.max(0.0);
        if self.elapsed >= self.duration {
            BlendStep::Complete
        } else {
            BlendStep::Progress(self.fraction())
        }
    }
}
