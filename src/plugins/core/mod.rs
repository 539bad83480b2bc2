//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables, viewport::Viewport};

pub fn plugin(app: &mut App) {
    // Keep tunables a test or launcher inserted beforehand.
    app.init_resource::<Tunables>();

    let tunables = app.world().resource::<Tunables>().clone();
    match tunables.rng_seed {
        Some(seed) => info!("Seeding game RNG with {seed}"),
        None => info!("Seeding game RNG from OS entropy"),
    }

    app.insert_resource(GameRng::from_seed_option(tunables.rng_seed));
    app.insert_resource(Viewport::centered(tunables.viewport_size));
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}
