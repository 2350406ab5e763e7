use rand::Rng;

use super::Sprite;
use crate::config::{ENEMY_HEIGHT, ENEMY_SCORE, ENEMY_SPEED, ENEMY_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    /// World px/s, positive = downward.
    pub velocity: f32,
    pub score_value: u32,
    destroyed: bool,
}

impl Enemy {
    pub fn new(x: f32) -> Self {
        Self {
            rect: Rect::new(x, -ENEMY_HEIGHT, ENEMY_WIDTH, ENEMY_HEIGHT),
            velocity: ENEMY_SPEED,
            score_value: ENEMY_SCORE,
            destroyed: false,
        }
    }

    /// Spawns just above the screen top at a uniformly random horizontal offset.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random_range(0.0..=SCREEN_WIDTH - ENEMY_WIDTH);
        Self::new(x)
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        vec![" \\|/ ", "{===}", " /_\\ "]
    }
}

impl Sprite for Enemy {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, dt: f32) {
        self.rect.y += self.velocity * dt;
        if self.rect.top() > SCREEN_HEIGHT {
            self.destroyed = true;
        }
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
