//! Live enemy bookkeeping with batch trimming.
//!
//! Entities are kept in spawn order (front = oldest). Once the list grows past
//! the high-water mark, the oldest are evicted in one pass down to the
//! low-water mark. This is a capacity policy, not a sliding window: between
//! trims the list is allowed to grow again.

use std::collections::VecDeque;

use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct EnemyPool {
    live: VecDeque<Entity>,
    high_water: usize,
    low_water: usize,
}

impl EnemyPool {
    pub fn new(high_water: usize, low_water: usize) -> Self {
        debug_assert!(low_water <= high_water);
        Self {
            live: VecDeque::with_capacity(high_water + 1),
            high_water,
            low_water,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.live.iter().copied()
    }

    /// Evict oldest entries down to the low-water mark if over the high-water mark.
    ///
    /// Returns the evicted entities, oldest first, for the caller to despawn.
    pub fn trim(&mut self) -> Vec<Entity> {
        if self.live.len() <= self.high_water {
            return Vec::new();
        }
        let excess = self.live.len() - self.low_water;
        self.live.drain(..excess).collect()
    }

    /// Trim if needed, then append the newly spawned enemy.
    pub fn admit(&mut self, e: Entity) -> Vec<Entity> {
        let evicted = self.trim();
        self.live.push_back(e);
        evicted
    }
}
