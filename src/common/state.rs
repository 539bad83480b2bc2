//! Global state machine.
//!
//! Game over is not a separate app state: the enemy spawner owns that
//! transition so that each session carries its own flag.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
