//! Per-frame collision sweeps, run after entity updates. Both passes remove
//! matched members from their groups in the same frame; the player pass runs
//! over whatever enemies survived the missile pass.

use crate::entities::{Groups, Player};

/// One enemy destroyed by a missile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileHit {
    /// World center of the destroyed enemy, where the explosion spawns.
    pub center: (f32, f32),
    pub score: u32,
}

/// Pairs intersecting enemies and missiles and removes both members of each
/// pair. Each missile is consumed by at most one enemy, so a missile
/// overlapping two enemies destroys exactly one of them.
pub fn resolve_missile_hits(groups: &mut Groups) -> Vec<MissileHit> {
    let mut missile_used = vec![false; groups.missiles.len()];
    let mut enemy_hit = vec![false; groups.enemies.len()];
    let mut hits = Vec::new();

    for (e_idx, enemy) in groups.enemies.iter().enumerate() {
        for (m_idx, missile) in groups.missiles.iter().enumerate() {
            if missile_used[m_idx] {
                continue;
            }
            if enemy.rect.intersects(&missile.rect) {
                missile_used[m_idx] = true;
                enemy_hit[e_idx] = true;
                hits.push(MissileHit {
                    center: enemy.rect.center(),
                    score: enemy.score_value,
                });
                break;
            }
        }
    }

    let mut idx = 0;
    groups.enemies.retain(|_| {
        let hit = enemy_hit[idx];
        idx += 1;
        !hit
    });
    let mut idx = 0;
    groups.missiles.retain(|_| {
        let used = missile_used[idx];
        idx += 1;
        !used
    });

    hits
}

/// Removes every enemy overlapping the player. Returns true if any enemy
/// connected; the caller decrements lives once regardless of the count.
pub fn resolve_player_hits(groups: &mut Groups, player: &Player) -> bool {
    let player_rect = player.rect;
    let before = groups.enemies.len();
    groups.enemies.retain(|e| !e.rect.intersects(&player_rect));
    groups.enemies.len() != before
}
