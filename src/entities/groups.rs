use super::{Enemy, Explosion, Missile, Sprite};

/// The three self-updating sprite collections. The player is held separately
/// by the app since exactly one exists while a round is in progress.
#[derive(Debug, Default)]
pub struct Groups {
    pub missiles: Vec<Missile>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
}

fn update_and_prune<S: Sprite>(sprites: &mut Vec<S>, dt: f32) {
    for sprite in sprites.iter_mut() {
        sprite.update(dt);
    }
    sprites.retain(|s| !s.is_destroyed());
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-updates every member, then drops the ones that marked themselves
    /// destroyed in the same frame.
    pub fn update(&mut self, dt: f32) {
        update_and_prune(&mut self.missiles, dt);
        update_and_prune(&mut self.enemies, dt);
        update_and_prune(&mut self.explosions, dt);
    }

    /// Empties every group. Used on round reset.
    pub fn clear(&mut self) {
        self.missiles.clear();
        self.enemies.clear();
        self.explosions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.missiles.is_empty() && self.enemies.is_empty() && self.explosions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_removes_destroyed_members_same_frame() {
        let mut groups = Groups::new();
        groups.missiles.push(Missile::new(400.0, 5.0));
        groups.missiles.push(Missile::new(400.0, 500.0));

        // The first missile exits the top and must be gone after this update.
        groups.update(0.1);
        assert_eq!(groups.missiles.len(), 1);
    }

    #[test]
    fn clear_empties_all_groups() {
        let mut groups = Groups::new();
        groups.missiles.push(Missile::new(400.0, 500.0));
        groups.enemies.push(Enemy::new(100.0));
        groups.explosions.push(Explosion::new((200.0, 200.0)));

        groups.clear();
        assert!(groups.is_empty());
    }
}
