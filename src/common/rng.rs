//! Injected randomness.
//!
//! Every random draw in gameplay goes through `GameRng` so a seed fully
//! determines spawn edges, positions, speeds and delays.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(Pcg32::from_rng(&mut rand::rng()))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}
