//! Mirror plugin: draw a line with the mouse, release to teleport the player
//! to its mirror image across that line.
//!
//! Pipeline (Update):
//! ```text
//!   update_cursor_world   window cursor -> world space      (CursorWorld)
//!   track_stroke          press / drag / release            (MirrorStroke)
//!                         release of a real line -> MirrorReleased message
//!   apply_reflection      MirrorReleased -> reflect player Transform
//! ```
//!
//! Input systems no-op when there is no window, camera or mouse resource, so
//! the plugin is safe in headless apps; tests drive it by writing messages.

use bevy::prelude::*;

use crate::geometry::{self, Line};
use crate::plugins::camera::MainCamera;
use crate::plugins::enemies::game_running;
use crate::plugins::player::Player;

/// Cursor position in world space, if it is over the window.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorWorld(pub Option<Vec2>);

/// The line currently being dragged out.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MirrorStroke {
    line: Option<Line>,
}

impl MirrorStroke {
    /// Begin a new stroke; both endpoints start at `p`.
    pub fn start_at(&mut self, p: Vec2) {
        self.line = Some(Line::new(p, p));
    }

    /// Move the free end. Ignored when no stroke is in progress.
    pub fn draw_to(&mut self, p: Vec2) {
        if let Some(line) = &mut self.line {
            line.end = p;
        }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.line.is_some()
    }

    /// True once the stroke spans two distinct points.
    pub fn was_drawn(&self) -> bool {
        self.line.is_some_and(|l| !l.is_degenerate())
    }

    #[inline]
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// End the stroke, returning the line only if one was actually drawn.
    pub fn finish(&mut self) -> Option<Line> {
        let drawn = self.was_drawn();
        let line = self.line.take();
        line.filter(|_| drawn)
    }
}

/// A finished mirror line, ready to be applied.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct MirrorReleased {
    pub line: Line,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<CursorWorld>()
        .init_resource::<MirrorStroke>()
        .add_message::<MirrorReleased>()
        .add_systems(
            Update,
            (
                update_cursor_world,
                track_stroke.after(update_cursor_world),
                apply_reflection.after(track_stroke).run_if(game_running),
            ),
        );
}

/// Render-only: show the stroke while dragging.
pub fn register_render(app: &mut App) {
    app.add_systems(Update, draw_stroke.after(track_stroke));
}

fn cursor_in_world(
    windows: &Query<&Window>,
    q_camera: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let screen = window.cursor_position()?;
    let (camera, camera_tf) = q_camera.single().ok()?;
    camera.viewport_to_world_2d(camera_tf, screen).ok()
}

fn update_cursor_world(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut cursor: ResMut<CursorWorld>,
) {
    cursor.0 = cursor_in_world(&windows, &q_camera);
}

fn track_stroke(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    cursor: Res<CursorWorld>,
    mut stroke: ResMut<MirrorStroke>,
    mut released: MessageWriter<MirrorReleased>,
) {
    let Some(buttons) = buttons else { return; };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(p) = cursor.0 {
            stroke.start_at(p);
        }
    } else if buttons.pressed(MouseButton::Left) {
        if let Some(p) = cursor.0 {
            stroke.draw_to(p);
        }
    }

    if buttons.just_released(MouseButton::Left) {
        match stroke.finish() {
            Some(line) => {
                released.write(MirrorReleased { line });
            }
            None => debug!("Mirror stroke released without a line"),
        }
    }
}

fn apply_reflection(
    mut released: MessageReader<MirrorReleased>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    for ev in released.read() {
        let Ok(mut tf) = q_player.single_mut() else {
            debug!("Mirror released with no single Player");
            continue;
        };

        let from = tf.translation.truncate();
        match geometry::reflect(ev.line, from) {
            Ok(to) => {
                tf.translation.x = to.x;
                tf.translation.y = to.y;
                info!("Player mirrored from {from} to {to}");
            }
            Err(e) => warn!("Ignoring mirror: {e}"),
        }
    }
}

fn draw_stroke(stroke: Res<MirrorStroke>, mut gizmos: Gizmos) {
    if let Some(line) = stroke.line() {
        gizmos.line_2d(line.start, line.end, Color::srgb(0.0, 1.0, 0.0));
    }
}

#[cfg(test)]
mod tests;
