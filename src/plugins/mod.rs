//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod enemies;
pub mod mirror;
pub mod physics;
pub mod player;

// Render-only
pub mod camera;
pub mod hud;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    mirror::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    hud::plugin(app);
    mirror::register_render(app);
}
