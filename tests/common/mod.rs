//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `mirror_dodge::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed step per `update()` so spawn timing is deterministic.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use mirror_dodge::common::tunables::Tunables;

pub const FRAME: Duration = Duration::from_millis(50);

pub fn app_headless() -> App {
    app_headless_with(Tunables::seeded(0x5EED))
}

pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists for physics.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);

    mirror_dodge::game::configure_headless(&mut app);
    // Mirror `App::run`: finalize plugins (avian registers its diagnostics
    // resources in `Plugin::finish`), since tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Run `n` frames.
pub fn run_frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}
