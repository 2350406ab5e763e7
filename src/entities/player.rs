use std::time::Instant;

use super::missile::Missile;
use crate::config::{
    MISSILE_COOLDOWN, PLAYER_BOTTOM_MARGIN, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH, START_LIVES,
};
use crate::geometry::Rect;
use crate::input::Held;

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub lives: i32,
    last_shot: Option<Instant>,
}

impl Player {
    /// A fresh ship, centered near the bottom of the playfield.
    pub fn new() -> Self {
        let rect = Rect::new(
            SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            SCREEN_HEIGHT - PLAYER_BOTTOM_MARGIN - PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        );
        Self {
            rect,
            speed: PLAYER_SPEED,
            lives: START_LIVES,
            last_shot: None,
        }
    }

    /// Moves horizontally by held input, clamped to the playfield. No vertical motion.
    pub fn update(&mut self, dt: f32, held: &Held) {
        if held.left {
            self.rect.x -= self.speed * dt;
        }
        if held.right {
            self.rect.x += self.speed * dt;
        }
        self.rect.clamp_x(0.0, SCREEN_WIDTH);
    }

    /// Fires a missile from the ship's nose if the cooldown has elapsed.
    /// Returns `None` while on cooldown; the caller plays the fire cue on `Some`.
    pub fn fire_missile(&mut self, now: Instant) -> Option<Missile> {
        if let Some(last) = self.last_shot
            && now.duration_since(last) <= MISSILE_COOLDOWN
        {
            return None;
        }
        self.last_shot = Some(now);
        let (cx, _) = self.rect.center();
        Some(Missile::new(cx, self.rect.top()))
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        vec!["  /^\\  ", " <|||> ", "/=====\\"]
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn held(left: bool, right: bool) -> Held {
        Held { left, right }
    }

    #[test]
    fn stays_within_left_bound() {
        let mut player = Player::new();
        player.update(100.0, &held(true, false));
        assert_eq!(player.rect.left(), 0.0);
    }

    #[test]
    fn stays_within_right_bound() {
        let mut player = Player::new();
        player.update(100.0, &held(false, true));
        assert_eq!(player.rect.right(), SCREEN_WIDTH);
    }

    #[test]
    fn first_shot_is_always_allowed() {
        let mut player = Player::new();
        assert!(player.fire_missile(Instant::now()).is_some());
    }

    #[test]
    fn shot_within_cooldown_is_rejected() {
        let mut player = Player::new();
        let t0 = Instant::now();
        assert!(player.fire_missile(t0).is_some());
        assert!(player.fire_missile(t0 + Duration::from_millis(400)).is_none());
        assert!(player.fire_missile(t0 + Duration::from_millis(500)).is_none());
        assert!(player.fire_missile(t0 + Duration::from_millis(501)).is_some());
    }

    #[test]
    fn rejected_shot_does_not_reset_cooldown() {
        let mut player = Player::new();
        let t0 = Instant::now();
        assert!(player.fire_missile(t0).is_some());
        assert!(player.fire_missile(t0 + Duration::from_millis(499)).is_none());
        // Still measured from t0, not from the rejected attempt.
        assert!(player.fire_missile(t0 + Duration::from_millis(501)).is_some());
    }

    #[test]
    fn missile_spawns_at_nose() {
        let mut player = Player::new();
        let missile = player.fire_missile(Instant::now()).unwrap();
        let (mx, _) = missile.rect.center();
        let (px, _) = player.rect.center();
        assert_eq!(mx, px);
        assert_eq!(missile.rect.center().1, player.rect.top());
    }
}
