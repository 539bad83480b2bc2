//! Enemies plugin: timed edge spawns that home in on the player, batch-trimmed
//! bookkeeping, and the one-shot game-over transition on contact.
//!
//! # Data flow
//! ```text
//!   OnEnter(InGame)   start_spawner      Idle -> Running, arm first delay
//!
//!   Update            tick_spawner       poll timer (Stopped => nothing)
//!                                        snapshot player position
//!                                        plan edge/position/velocity (GameRng)
//!                                        spawn enemy, admit to pool, despawn evicted
//!
//!   FixedPostUpdate   handle_player_hits CollisionStart(Enemy, Player)
//!                                        first hit only: zero player velocity,
//!                                        stop spawner, write GameOver
//! ```
//!
//! Enemies are dynamic sensors: they report overlaps with the player but never
//! push it around. Avian only emits `CollisionStart` because enemies carry
//! `CollisionEventsEnabled`.

pub mod plan;
pub mod pool;
pub mod spawner;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{
    layers::Layer, rng::GameRng, state::GameState, tunables::Tunables, viewport::Viewport,
};
use crate::plugins::player::Player;

pub use plan::{ScreenEdge, SpawnPlan};
pub use spawner::{EnemySpawner, SpawnerState};

#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Written exactly once per session, on the first enemy/player contact.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub player: Entity,
    pub enemy: Entity,
}

pub fn plugin(app: &mut App) {
    let spawner = EnemySpawner::new(app.world().resource::<Tunables>());

    app.insert_resource(spawner)
        .add_message::<GameOver>()
        .add_systems(OnEnter(GameState::InGame), start_spawner)
        .add_systems(Update, tick_spawner.run_if(in_state(GameState::InGame)))
        .add_systems(
            FixedPostUpdate,
            handle_player_hits
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Run condition: true until the spawner has entered its terminal state.
pub fn game_running(spawner: Option<Res<EnemySpawner>>) -> bool {
    spawner.is_none_or(|s| !s.is_stopped())
}

// -----------------------------------------------------------------------------
// Spawning
// -----------------------------------------------------------------------------

fn start_spawner(
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    mut spawner: ResMut<EnemySpawner>,
) {
    if spawner.start(&mut rng.0, &tunables) {
        info!("Enemy spawner started");
    }
}

/// Enemies only ever report contacts with the player.
pub(crate) fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Player])
}

fn enemy_bundle(plan: SpawnPlan, r: f32) -> impl Bundle {
    (
        Name::new("Enemy"),
        Enemy,
        Sprite {
            color: Color::srgb(0.9, 0.25, 0.25),
            custom_size: Some(Vec2::splat(r * 2.0)),
            ..default()
        },
        Transform::from_translation(plan.position.extend(1.0)),
        RigidBody::Dynamic,
        Collider::circle(r),
        Sensor,
        enemy_layers(),
        LinearVelocity(plan.velocity),
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    )
}

/// Fire the spawn timer and create one enemy aimed at where the player is now.
fn tick_spawner(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    viewport: Res<Viewport>,
    mut rng: ResMut<GameRng>,
    mut spawner: ResMut<EnemySpawner>,
    q_player: Query<&Transform, With<Player>>,
) {
    // Without a player the timer holds, so no firing is lost.
    let Ok(player_tf) = q_player.single() else {
        return;
    };

    if !spawner.poll(time.delta(), &mut rng.0, &tunables) {
        return;
    }

    // Snapshot at firing time, not at scheduling time.
    let target = player_tf.translation.truncate();

    let plan = plan::plan_spawn(&mut rng.0, viewport.rect(), target, &tunables);
    let e = commands.spawn(enemy_bundle(plan, tunables.enemy_radius)).id();
    debug!(
        "Enemy {e} from {:?} at {} heading {}",
        plan.edge, plan.position, plan.velocity
    );

    let evicted = spawner.admit(e);
    if !evicted.is_empty() {
        debug!("Trimmed {} oldest enemies", evicted.len());
    }
    for old in evicted {
        commands.entity(old).try_despawn();
    }
}

// -----------------------------------------------------------------------------
// Player contact
// -----------------------------------------------------------------------------

#[inline]
fn gameplay_owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

/// First enemy contact ends the session; later contacts are ignored.
pub fn handle_player_hits(
    mut started: MessageReader<CollisionStart>,
    q_enemies: Query<(), With<Enemy>>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
    mut spawner: ResMut<EnemySpawner>,
    mut game_over: MessageWriter<GameOver>,
) {
    for ev in started.read() {
        let a = gameplay_owner(ev.collider1, ev.body1);
        let b = gameplay_owner(ev.collider2, ev.body2);

        let (player, enemy) = if q_player.contains(a) && q_enemies.contains(b) {
            (a, b)
        } else if q_player.contains(b) && q_enemies.contains(a) {
            (b, a)
        } else {
            continue;
        };

        if !spawner.stop() {
            continue;
        }

        if let Ok(mut vel) = q_player.get_mut(player) {
            vel.0 = Vec2::ZERO;
        }

        info!("Player {player} hit by enemy {enemy}: game over");
        game_over.write(GameOver { player, enemy });
    }
}
