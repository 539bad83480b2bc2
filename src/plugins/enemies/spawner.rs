//! Enemy spawner state machine.
//!
//! ```text
//!   Idle ──start()──► Running ──stop()──► Stopped (terminal)
//!                      │   ▲
//!                      └───┘ poll(): timer fired -> re-arm with a new random delay
//! ```
//!
//! The timer is single-shot and re-armed after every firing, so each gap is an
//! independent draw rather than a fixed rate. A stopped spawner is never
//! re-armed: `poll` checks the state before touching the timer.
//!
//! `Stopped` is also the session's game-over flag. Restarting means building
//! a fresh `EnemySpawner`.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use super::plan::pick_spawn_delay;
use super::pool::EnemyPool;
use crate::common::tunables::Tunables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnerState {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Resource, Debug, Clone)]
pub struct EnemySpawner {
    state: SpawnerState,
    timer: Timer,
    pool: EnemyPool,
}

impl EnemySpawner {
    pub fn new(tunables: &Tunables) -> Self {
        Self {
            state: SpawnerState::Idle,
            timer: Timer::new(Duration::ZERO, TimerMode::Once),
            pool: EnemyPool::new(tunables.pool_high_water, tunables.pool_low_water),
        }
    }

    #[inline]
    pub fn state(&self) -> SpawnerState {
        self.state
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == SpawnerState::Stopped
    }

    #[inline]
    pub fn pool(&self) -> &EnemyPool {
        &self.pool
    }

    /// Time left until the next firing, if one is armed.
    pub fn time_until_next(&self) -> Option<Duration> {
        (self.state == SpawnerState::Running).then(|| self.timer.remaining())
    }

    /// Idle -> Running, arming the first spawn. Returns false if not Idle.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R, tunables: &Tunables) -> bool {
        if self.state != SpawnerState::Idle {
            return false;
        }
        self.state = SpawnerState::Running;
        self.arm(rng, tunables);
        true
    }

    /// Enter the terminal state. Returns true only for the first call.
    pub fn stop(&mut self) -> bool {
        if self.state == SpawnerState::Stopped {
            return false;
        }
        self.state = SpawnerState::Stopped;
        true
    }

    /// Advance the timer; returns true when a spawn is due.
    ///
    /// A firing re-arms the timer with a fresh delay. At most one firing per call.
    pub fn poll<R: Rng + ?Sized>(&mut self, delta: Duration, rng: &mut R, tunables: &Tunables) -> bool {
        if self.state != SpawnerState::Running {
            return false;
        }

        self.timer.tick(delta);
        if !self.timer.is_finished() {
            return false;
        }

        self.arm(rng, tunables);
        true
    }

    /// Record a freshly spawned enemy; returns entities evicted by the batch trim.
    pub fn admit(&mut self, e: Entity) -> Vec<Entity> {
        self.pool.admit(e)
    }

    fn arm<R: Rng + ?Sized>(&mut self, rng: &mut R, tunables: &Tunables) {
        let delay = pick_spawn_delay(rng, tunables);
        self.timer = Timer::new(delay, TimerMode::Once);
        debug!("Next enemy in {} ms", delay.as_millis());
    }
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self::new(&Tunables::default())
    }
}
