//! Pure spawn planning: where an enemy appears and how fast it flies.
//!
//! Everything here draws from a caller-supplied `Rng`, so a seeded generator
//! reproduces the exact same wave.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::common::tunables::Tunables;

/// Screen edge an enemy enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenEdge {
    Top,
    Left,
    Bottom,
    Right,
}

impl ScreenEdge {
    pub const ALL: [ScreenEdge; 4] = [
        ScreenEdge::Top,
        ScreenEdge::Left,
        ScreenEdge::Bottom,
        ScreenEdge::Right,
    ];
}

/// Everything needed to spawn one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub edge: ScreenEdge,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Uniform sample in `[lo, hi)` from a single `[0, 1)` draw.
///
/// Unlike `random_range` this never panics on an empty range.
#[inline]
fn lerp_draw<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.random::<f32>()
}

/// Each edge with probability 1/4.
pub fn pick_screen_edge<R: Rng + ?Sized>(rng: &mut R) -> ScreenEdge {
    let v = rng.random::<f32>();
    let i = ((v * 4.0) as usize).min(ScreenEdge::ALL.len() - 1);
    ScreenEdge::ALL[i]
}

/// A point `margin` beyond `edge`, uniformly placed along it.
///
/// World space is y-up, so the top edge is `viewport.max.y`.
pub fn pick_starting_position<R: Rng + ?Sized>(
    edge: ScreenEdge,
    viewport: Rect,
    margin: f32,
    rng: &mut R,
) -> Vec2 {
    match edge {
        ScreenEdge::Top => Vec2::new(
            lerp_draw(rng, viewport.min.x, viewport.max.x),
            viewport.max.y + margin,
        ),
        ScreenEdge::Bottom => Vec2::new(
            lerp_draw(rng, viewport.min.x, viewport.max.x),
            viewport.min.y - margin,
        ),
        ScreenEdge::Left => Vec2::new(
            viewport.min.x - margin,
            lerp_draw(rng, viewport.min.y, viewport.max.y),
        ),
        ScreenEdge::Right => Vec2::new(
            viewport.max.x + margin,
            lerp_draw(rng, viewport.min.y, viewport.max.y),
        ),
    }
}

pub fn pick_speed<R: Rng + ?Sized>(rng: &mut R, tunables: &Tunables) -> f32 {
    lerp_draw(rng, tunables.enemy_speed_min, tunables.enemy_speed_max)
}

pub fn pick_spawn_delay<R: Rng + ?Sized>(rng: &mut R, tunables: &Tunables) -> Duration {
    let ms = lerp_draw(
        rng,
        tunables.spawn_delay_min_ms as f32,
        tunables.spawn_delay_max_ms as f32,
    );
    Duration::from_secs_f32(ms / 1000.0)
}

/// Velocity of `speed` pointing from `start` to `target`.
///
/// Zero when both coincide.
#[inline]
pub fn aim_velocity(start: Vec2, target: Vec2, speed: f32) -> Vec2 {
    (target - start).normalize_or_zero() * speed
}

pub fn plan_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Rect,
    target: Vec2,
    tunables: &Tunables,
) -> SpawnPlan {
    let edge = pick_screen_edge(rng);
    let position = pick_starting_position(edge, viewport, tunables.spawn_margin, rng);
    let speed = pick_speed(rng, tunables);

    SpawnPlan {
        edge,
        position,
        velocity: aim_velocity(position, target, speed),
    }
}
