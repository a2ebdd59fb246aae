//! Events in and out of the season switcher.

use bevy::prelude::*;

use seasons::Season;

/// Ask for the next season, as if the advance key had been pressed this
/// frame. Ignored while a blend is running.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct AdvanceSeasonRequest;

/// A blend from `from` to `to` has begun.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonTransitionStarted {
    pub from: Season,
    pub to: Season,
}

/// A blend finished; `season` is now the ground's season.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonCommitted {
    pub season: Season,
}
