//! HUD plugin (render-only): shows "Game Over" when the session ends.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::enemies::GameOver;

#[derive(Component)]
pub struct GameOverLabel;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, show_game_over.run_if(in_state(GameState::InGame)));
}

fn show_game_over(
    mut commands: Commands,
    mut game_over: MessageReader<GameOver>,
    q_label: Query<(), With<GameOverLabel>>,
) {
    if game_over.read().last().is_none() || !q_label.is_empty() {
        return;
    }

    commands.spawn((
        Name::new("GameOverLabel"),
        GameOverLabel,
        Text2d::new("Game Over"),
        TextColor(Color::srgb(1.0, 0.3, 0.3)),
        Transform::from_xyz(0.0, 0.0, 100.0),
        DespawnOnExit(GameState::InGame),
    ));
}

#[cfg(test)]
mod tests;
