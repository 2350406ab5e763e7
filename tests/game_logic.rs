/// Integration tests for game logic
///
/// These tests verify interactions between the entities and the core
/// mechanics: movement clamping, the fire cooldown, the spawn-interval
/// formula, collision resolution, and the explosion frame schedule.
use std::time::{Duration, Instant};

use proptest::prelude::*;

use arcade_missile::collision::{resolve_missile_hits, resolve_player_hits};
use arcade_missile::config::{SCREEN_WIDTH, START_LIVES};
use arcade_missile::entities::{Enemy, Explosion, Groups, Missile, Player, Sprite};
use arcade_missile::input::Held;
use arcade_missile::spawner::{Spawner, interval_ms};

fn enemy_at(x: f32, y: f32) -> Enemy {
    let mut enemy = Enemy::new(x);
    enemy.rect.y = y;
    enemy
}

#[test]
fn fresh_player_has_three_lives() {
    let player = Player::new();
    assert_eq!(player.lives, START_LIVES);
    assert!(player.is_alive());
}

#[test]
fn missile_rejected_within_cooldown_accepted_after() {
    let mut player = Player::new();
    let t0 = Instant::now();

    assert!(player.fire_missile(t0).is_some());
    assert!(player.fire_missile(t0 + Duration::from_millis(250)).is_none());
    assert!(player.fire_missile(t0 + Duration::from_millis(500)).is_none());
    assert!(player.fire_missile(t0 + Duration::from_millis(501)).is_some());
}

#[test]
fn spawn_interval_scenarios() {
    assert_eq!(interval_ms(0), 1500);
    assert_eq!(interval_ms(200), 1480);
    assert_eq!(interval_ms(20000), 200);
}

#[test]
fn spawner_produces_at_most_one_enemy_per_frame() {
    let t0 = Instant::now();
    let mut spawner = Spawner::new(t0);
    let mut rng = rand::rng();

    // Even after a long stall only one enemy comes out of a single frame.
    let late = t0 + Duration::from_secs(30);
    assert!(spawner.try_spawn(late, 0, &mut rng).is_some());
    assert!(spawner.try_spawn(late, 0, &mut rng).is_none());
}

#[test]
fn missile_hits_remove_exactly_one_pair_each() {
    let mut groups = Groups::new();
    groups.enemies.push(enemy_at(100.0, 100.0));
    groups.enemies.push(enemy_at(400.0, 300.0));
    groups.missiles.push(Missile::new(120.0, 110.0));

    let hits = resolve_missile_hits(&mut groups);
    assert_eq!(hits.len(), 1);
    assert_eq!(groups.enemies.len(), 1);
    assert!(groups.missiles.is_empty());

    // The surviving enemy is still there for the next frame.
    assert_eq!(groups.enemies[0].rect.x, 400.0);
}

#[test]
fn one_missile_two_enemies_kills_exactly_one() {
    let mut groups = Groups::new();
    groups.enemies.push(enemy_at(100.0, 100.0));
    groups.enemies.push(enemy_at(102.0, 104.0));
    groups.missiles.push(Missile::new(110.0, 110.0));

    let hits = resolve_missile_hits(&mut groups);
    assert_eq!(hits.len(), 1);
    assert_eq!(groups.enemies.len(), 1);
}

#[test]
fn collision_resolution_is_idempotent_per_frame() {
    let mut groups = Groups::new();
    let player = Player::new();
    let (px, py) = player.rect.center();

    groups.enemies.push(enemy_at(100.0, 100.0));
    groups.enemies.push(enemy_at(px - 20.0, py - 10.0));
    groups.missiles.push(Missile::new(120.0, 110.0));

    resolve_missile_hits(&mut groups);
    resolve_player_hits(&mut groups, &player);

    // Re-running the full sweep finds no further matches.
    assert!(resolve_missile_hits(&mut groups).is_empty());
    assert!(!resolve_player_hits(&mut groups, &player));
}

#[test]
fn explosion_shows_each_frame_for_50ms_then_disappears() {
    // Step in 10 ms increments and check the frame visible at each time.
    let mut explosion = Explosion::new((200.0, 200.0));
    let mut elapsed_ms = 0u32;
    while !explosion.is_destroyed() && elapsed_ms < 400 {
        // Off the exact 50 ms boundaries the schedule is unambiguous:
        // frame k is visible throughout [50k, 50(k+1)).
        if elapsed_ms % 50 != 0 {
            assert_eq!(explosion.frame_index(), (elapsed_ms / 50) as usize);
        }
        explosion.update(0.010);
        elapsed_ms += 10;
    }
    // All six frames shown, gone by 300 ms (within one float-rounding step).
    assert!(explosion.is_destroyed());
    assert!((290..=310).contains(&elapsed_ms));
}

#[test]
fn missile_and_enemy_leave_screen_and_are_pruned() {
    let mut groups = Groups::new();
    groups.missiles.push(Missile::new(400.0, 550.0));
    groups.enemies.push(Enemy::new(100.0));

    // Missile needs ~1.15 s upward at 500 px/s; enemy ~4.2 s downward at 150.
    for _ in 0..150 {
        groups.update(1.0 / 30.0);
    }
    assert!(groups.is_empty());
}

proptest! {
    #[test]
    fn player_stays_in_bounds_for_any_dt(
        dt in 0.0f32..100.0,
        left in any::<bool>(),
        right in any::<bool>(),
        steps in 1usize..20,
    ) {
        let mut player = Player::new();
        let held = Held { left, right };
        for _ in 0..steps {
            player.update(dt, &held);
            prop_assert!(player.rect.left() >= 0.0);
            prop_assert!(player.rect.right() <= SCREEN_WIDTH);
        }
    }

    #[test]
    fn spawn_interval_monotone_and_floored(score in 0u32..2_000_000, bump in 0u32..10_000) {
        let a = interval_ms(score);
        let b = interval_ms(score + bump);
        prop_assert!(b <= a);
        prop_assert!(a >= 200);
        prop_assert!(a <= 1500);
    }
}
