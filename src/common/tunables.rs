//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_radius: f32,

    /// Visible area used until a window reports its real size.
    pub viewport_size: Vec2,

    /// How far beyond a screen edge enemies appear.
    pub spawn_margin: f32,
    pub enemy_radius: f32,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub spawn_delay_min_ms: u32,
    pub spawn_delay_max_ms: u32,

    /// Trim the live enemy list once it grows past this many...
    pub pool_high_water: usize,
    /// ...down to this many, oldest first.
    pub pool_low_water: usize,

    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 300.0,
            player_radius: 16.0,
            viewport_size: Vec2::new(800.0, 600.0),
            spawn_margin: 100.0,
            enemy_radius: 12.0,
            enemy_speed_min: 500.0,
            enemy_speed_max: 1500.0,
            spawn_delay_min_ms: 300,
            spawn_delay_max_ms: 3000,
            pool_high_water: 10,
            pool_low_water: 5,
            rng_seed: None,
        }
    }
}

impl Tunables {
    /// Default tuning with a fixed seed, handy for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self { rng_seed: Some(seed), ..default() }
    }
}
