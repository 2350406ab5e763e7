use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::{SPAWN_BASE_MS, SPAWN_FLOOR_MS};
use crate::entities::Enemy;

/// Computes the gap enforced between consecutive enemy spawns. Shrinks
/// linearly with score and bottoms out at the floor.
pub fn interval_ms(score: u32) -> u64 {
    SPAWN_BASE_MS
        .saturating_sub(score as u64 / 10)
        .max(SPAWN_FLOOR_MS)
}

/// Time-gated enemy factory. At most one enemy per frame.
#[derive(Debug)]
pub struct Spawner {
    last_spawn: Instant,
}

impl Spawner {
    pub fn new(now: Instant) -> Self {
        Self { last_spawn: now }
    }

    /// Resets the gate, as on round start.
    pub fn reset(&mut self, now: Instant) {
        self.last_spawn = now;
    }

    /// Produces one enemy at a random horizontal offset if the score-dependent
    /// interval has elapsed since the previous spawn.
    pub fn try_spawn<R: Rng>(&mut self, now: Instant, score: u32, rng: &mut R) -> Option<Enemy> {
        let interval = Duration::from_millis(interval_ms(score));
        if now.duration_since(self.last_spawn) > interval {
            self.last_spawn = now;
            Some(Enemy::spawn(rng))
        } else {
            None
        }
    }
}
