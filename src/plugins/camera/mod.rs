//! Camera plugin (render-only).
//!
//! The camera stays fixed on the world origin, so the visible area is the
//! window size centred there. That rectangle is mirrored into `Viewport`
//! for the spawner, which places enemies just outside it.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, viewport::Viewport};

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(PreUpdate, sync_viewport_to_window);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn sync_viewport_to_window(
    windows: Query<&Window>,
    q_cam: Query<&Transform, With<MainCamera>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = windows.single() else { return; };
    let center = q_cam
        .single()
        .map(|tf| tf.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    let rect = Rect::from_center_size(center, window.size());
    if viewport.0 != rect {
        debug!("Viewport now {:?}", rect);
        viewport.0 = rect;
    }
}
