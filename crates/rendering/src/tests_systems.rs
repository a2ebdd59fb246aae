//! Headless app tests for the season switcher systems.

use std::time::Duration;

use bevy::prelude::*;

use seasons::{DecorationKind, Season, SeasonAssetSet, SeasonAssets, SeasonSwitcherSettings};

use crate::ground_material::{season_ground_material, SeasonGroundMaterial};
use crate::ground_surface::{GroundSeasons, SeasonGround, SeasonTextures};
use crate::{
    AdvanceSeasonRequest, SeasonCommitted, SeasonDecoration, SeasonSwitcherPlugin,
    SeasonTransitionStarted,
};

// -------------------------------------------------------------------------
// Helpers
// -------------------------------------------------------------------------

fn image(id: u128) -> Handle<Image> {
    Handle::weak_from_u128(id)
}

fn test_textures() -> SeasonAssets<Handle<Image>> {
    SeasonAssets {
        winter: SeasonAssetSet::new(Some(image(10)), Some(image(11))),
        spring: SeasonAssetSet::new(Some(image(20)), Some(image(21))),
        summer: SeasonAssetSet::new(Some(image(30)), Some(image(31))),
        autumn: SeasonAssetSet::new(Some(image(40)), Some(image(41))),
    }
}

struct Harness {
    app: App,
    ground_material: Option<Handle<SeasonGroundMaterial>>,
}

impl Harness {
    /// Build the app with `grounds` ground entities; the first one's material
    /// is the one inspected by `extension`.
    fn new(settings: SeasonSwitcherSettings, grounds: usize) -> Self {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .insert_resource(settings)
            .insert_resource(SeasonTextures(test_textures()))
            .init_resource::<Assets<SeasonGroundMaterial>>()
            .add_plugins(SeasonSwitcherPlugin);

        let mut ground_material = None;
        for _ in 0..grounds {
            let handle = app
                .world_mut()
                .resource_mut::<Assets<SeasonGroundMaterial>>()
                .add(season_ground_material(StandardMaterial::default(), false));
            app.world_mut()
                .spawn((SeasonGround, MeshMaterial3d(handle.clone())));
            if ground_material.is_none() {
                ground_material = Some(handle);
            }
        }
        for kind in DecorationKind::ALL {
            app.world_mut()
                .spawn((SeasonDecoration(kind), Visibility::Hidden));
        }

        let mut harness = Self {
            app,
            ground_material,
        };
        // Startup + PostStartup run on the first update.
        harness.frame(Duration::ZERO, false);
        harness
    }

    fn with_duration(secs: f32) -> Self {
        Self::new(
            SeasonSwitcherSettings {
                blend_duration_secs: secs,
                ..Default::default()
            },
            1,
        )
    }

    fn send_request(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<Events<AdvanceSeasonRequest>>()
            .send(AdvanceSeasonRequest);
    }

    /// Run one frame of `dt`, pressing Space on this frame if `press`.
    fn frame(&mut self, dt: Duration, press: bool) {
        let world = self.app.world_mut();
        world.resource_mut::<Time>().advance_by(dt);
        {
            let mut keys = world.resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            if press {
                keys.press(KeyCode::Space);
            } else {
                keys.release(KeyCode::Space);
            }
        }
        self.app.update();
    }

    fn frame_secs(&mut self, secs: f32, press: bool) {
        self.frame(Duration::from_secs_f32(secs), press);
    }

    fn seasons(&self) -> &GroundSeasons {
        self.app.world().resource::<GroundSeasons>()
    }

    fn extension(&self) -> crate::SeasonBlendExtension {
        let handle = self
            .ground_material
            .as_ref()
            .expect("harness has a ground");
        self.app
            .world()
            .resource::<Assets<SeasonGroundMaterial>>()
            .get(handle)
            .expect("ground material exists")
            .extension
            .clone()
    }

    fn visible(&mut self, kind: DecorationKind) -> bool {
        let mut query = self
            .app
            .world_mut()
            .query::<(&SeasonDecoration, &Visibility)>();
        query
            .iter(self.app.world())
            .any(|(d, v)| d.0 == kind && *v != Visibility::Hidden)
    }

    fn started_events(&self) -> Vec<SeasonTransitionStarted> {
        self.app
            .world()
            .resource::<Events<SeasonTransitionStarted>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    fn committed_events(&self) -> Vec<SeasonCommitted> {
        self.app
            .world()
            .resource::<Events<SeasonCommitted>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }
}

// -------------------------------------------------------------------------
// Startup
// -------------------------------------------------------------------------

#[test]
fn test_startup_writes_winter_to_ground() {
    let harness = Harness::with_duration(2.5);
    let switcher = harness.seasons().switcher();
    assert!(switcher.is_enabled());
    assert_eq!(switcher.current(), Season::Winter);

    let ext = harness.extension();
    assert_eq!(ext.season_a, Some(image(10)));
    assert_eq!(ext.params.blend, 0.0);
    assert_eq!(ext.normal_a, None, "normals are off by default");
}

#[test]
fn test_missing_ground_disables_switcher() {
    let mut harness = Harness::new(SeasonSwitcherSettings::default(), 0);
    assert!(!harness.seasons().switcher().is_enabled());
    assert!(harness.seasons().material.is_none());

    harness.frame_secs(0.1, true);
    harness.frame_secs(5.0, false);
    assert_eq!(harness.seasons().switcher().current(), Season::Winter);
    assert!(!harness.visible(DecorationKind::Spring));
    assert!(harness.started_events().is_empty());
}

#[test]
fn test_two_grounds_disable_switcher() {
    let mut harness = Harness::new(SeasonSwitcherSettings::default(), 2);
    assert!(!harness.seasons().switcher().is_enabled());
    assert!(harness.seasons().material.is_none());

    let ext = harness.extension();
    assert_eq!(ext.season_a, None, "neither ground is written");

    harness.frame_secs(0.1, true);
    assert!(harness.started_events().is_empty());
    assert!(!harness.visible(DecorationKind::Spring));
}

#[test]
fn test_normals_written_when_enabled() {
    let harness = Harness::new(
        SeasonSwitcherSettings {
            use_normals: true,
            ..Default::default()
        },
        1,
    );
    let ext = harness.extension();
    assert_eq!(ext.normal_a, Some(image(11)));
    assert_eq!(ext.params.normals_enabled, 1);
    assert_eq!(ext.params.normal_a_set, 1);
}

// -------------------------------------------------------------------------
// Trigger and blend
// -------------------------------------------------------------------------

#[test]
fn test_space_starts_transition_and_shows_spring() {
    let mut harness = Harness::with_duration(2.5);
    harness.frame_secs(0.016, true);

    assert_eq!(
        harness.started_events(),
        vec![SeasonTransitionStarted {
            from: Season::Winter,
            to: Season::Spring
        }]
    );
    assert!(harness.visible(DecorationKind::Spring));
    assert!(!harness.visible(DecorationKind::Summer));

    let ext = harness.extension();
    assert_eq!(ext.season_a, Some(image(10)));
    assert_eq!(ext.season_b, Some(image(20)));
    assert_eq!(ext.params.blend, 0.0);
}

#[test]
fn test_held_key_does_not_retrigger() {
    let mut harness = Harness::with_duration(0.0);
    harness.frame_secs(0.016, true);
    harness.frame_secs(0.016, false);
    assert_eq!(harness.seasons().switcher().current(), Season::Spring);

    // Key stays down without a new press edge.
    harness
        .app
        .world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    harness
        .app
        .world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    harness.app.update();
    assert!(!harness.seasons().switcher().is_transitioning());
}

#[test]
fn test_blend_progresses_with_frame_time() {
    let mut harness = Harness::with_duration(2.0);
    harness.frame_secs(0.0, true);
    harness.frame_secs(0.5, false);
    assert_eq!(harness.extension().params.blend, 0.25);
    harness.frame_secs(0.5, false);
    assert_eq!(harness.extension().params.blend, 0.5);
    assert_eq!(harness.seasons().switcher().current(), Season::Winter);
}

#[test]
fn test_second_press_during_blend_ignored() {
    let mut harness = Harness::with_duration(2.0);
    harness.frame_secs(0.0, true);
    harness.frame_secs(0.5, false);
    harness.frame_secs(0.5, true);

    assert!(harness.started_events().is_empty());
    assert_eq!(harness.seasons().switcher().target(), Some(Season::Spring));
    assert_eq!(harness.extension().season_b, Some(image(20)));
}

#[test]
fn test_completion_commits_next_season() {
    let mut harness = Harness::with_duration(1.0);
    harness.frame_secs(0.0, true);
    harness.frame_secs(0.5, false);
    harness.frame_secs(0.5, false);

    assert_eq!(
        harness.committed_events(),
        vec![SeasonCommitted {
            season: Season::Spring
        }]
    );
    let ext = harness.extension();
    assert_eq!(ext.season_a, Some(image(20)));
    assert_eq!(ext.params.blend, 0.0);
    assert_eq!(harness.seasons().switcher().current(), Season::Spring);
    assert!(!harness.seasons().switcher().is_transitioning());
}

#[test]
fn test_advance_request_event_acts_as_press() {
    let mut harness = Harness::with_duration(2.5);
    harness.send_request();
    harness.frame_secs(0.016, false);
    assert_eq!(harness.seasons().switcher().target(), Some(Season::Spring));
}

#[test]
fn test_key_and_request_on_same_frame_count_once() {
    let mut harness = Harness::with_duration(0.5);
    harness.send_request();
    harness.frame_secs(0.016, true);
    assert_eq!(
        harness.started_events(),
        vec![SeasonTransitionStarted {
            from: Season::Winter,
            to: Season::Spring
        }]
    );

    harness.frame_secs(0.5, false);
    assert_eq!(harness.seasons().switcher().current(), Season::Spring);
    harness.frame_secs(0.016, false);
    assert!(
        !harness.seasons().switcher().is_transitioning(),
        "the second source did not start another blend"
    );
}

#[test]
fn test_request_during_blend_is_dropped() {
    let mut harness = Harness::with_duration(1.0);
    harness.frame_secs(0.0, true);
    harness.send_request();
    harness.frame_secs(0.25, false);
    assert_eq!(harness.seasons().switcher().target(), Some(Season::Spring));

    harness.frame_secs(0.75, false);
    assert_eq!(
        harness.committed_events(),
        vec![SeasonCommitted {
            season: Season::Spring
        }]
    );

    harness.frame_secs(0.016, false);
    assert!(harness.started_events().is_empty());
    assert!(!harness.seasons().switcher().is_transitioning());
    assert_eq!(harness.seasons().switcher().current(), Season::Spring);
}

#[test]
fn test_four_transitions_return_to_winter() {
    let mut harness = Harness::with_duration(0.5);
    for expected in [Season::Spring, Season::Summer, Season::Autumn, Season::Winter] {
        harness.frame_secs(0.016, true);
        harness.frame_secs(0.25, false);
        harness.frame_secs(0.25, false);
        assert_eq!(harness.seasons().switcher().current(), expected);
    }
    for kind in DecorationKind::ALL {
        assert!(!harness.visible(kind), "{kind:?} should be hidden again");
    }
    assert_eq!(harness.extension().season_a, Some(image(10)));
}
