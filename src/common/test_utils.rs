//! Test helpers.
//!
//! `World::run_system_once` runs a single system without building a schedule.
//! Systems that use `Commands` only enqueue structural changes, so we flush
//! afterwards to make spawns and despawns visible to assertions.

use std::time::Duration;

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Insert a default `Time` that has already advanced by `dt`.
pub fn insert_time_advanced_by(world: &mut World, dt: Duration) {
    let mut time = Time::<()>::default();
    time.advance_by(dt);
    world.insert_resource(time);
}

/// Ensure the message buffer for `M` exists.
pub fn ensure_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Drain every message of type `M` written so far.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
