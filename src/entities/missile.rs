use super::Sprite;
use crate::config::{MISSILE_HEIGHT, MISSILE_SPEED, MISSILE_WIDTH};
use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub struct Missile {
    pub rect: Rect,
    /// World px/s, negative = upward.
    pub velocity: f32,
    destroyed: bool,
}

impl Missile {
    /// Missile centered on the given point (the firing ship's nose).
    pub fn new(cx: f32, cy: f32) -> Self {
        Self {
            rect: Rect::centered_on(cx, cy, MISSILE_WIDTH, MISSILE_HEIGHT),
            velocity: MISSILE_SPEED,
            destroyed: false,
        }
    }

    pub fn get_sprite(&self) -> char {
        '|'
    }
}

impl Sprite for Missile {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, dt: f32) {
        self.rect.y += self.velocity * dt;
        if self.rect.bottom() < 0.0 {
            self.destroyed = true;
        }
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_upward() {
        let mut missile = Missile::new(400.0, 500.0);
        let y0 = missile.rect.y;
        missile.update(0.1);
        assert!(missile.rect.y < y0);
        assert_eq!(missile.rect.y, y0 + MISSILE_SPEED * 0.1);
    }

    #[test]
    fn destroyed_past_top_edge() {
        let mut missile = Missile::new(400.0, 10.0);
        assert!(!missile.is_destroyed());
        // Enough time to carry the whole rect above y = 0.
        missile.update(0.1);
        assert!(missile.is_destroyed());
    }
}
