use super::Sprite;
use crate::config::{EXPLOSION_FRAME_TIME, EXPLOSION_SIZE};
use crate::geometry::Rect;

/// Six-frame blast animation, 50 ms per frame, centered on a collision point.
const FRAMES: [&str; 6] = [".", "o", "O", "(O)", "(*)", "*"];

#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    frame: usize,
    /// Time accrued toward the next frame advance; the remainder is carried
    /// so frame boundaries stay on exact 50 ms multiples.
    elapsed: f32,
    destroyed: bool,
}

impl Explosion {
    pub fn new(center: (f32, f32)) -> Self {
        Self {
            rect: Rect::centered_on(center.0, center.1, EXPLOSION_SIZE, EXPLOSION_SIZE),
            frame: 0,
            elapsed: 0.0,
            destroyed: false,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn get_sprite(&self) -> &'static str {
        FRAMES[self.frame.min(FRAMES.len() - 1)]
    }
}

impl Sprite for Explosion {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        while self.elapsed >= EXPLOSION_FRAME_TIME && !self.destroyed {
            self.elapsed -= EXPLOSION_FRAME_TIME;
            self.frame += 1;
            if self.frame >= FRAMES.len() {
                self.destroyed = true;
            }
        }
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
