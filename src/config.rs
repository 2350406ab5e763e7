//! Gameplay constants. All distances are in world pixels, all speeds in
//! world pixels per second; the renderer scales world space to terminal cells.

use std::time::Duration;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const TARGET_FPS: u32 = 30;
pub const FRAME_BUDGET: Duration = Duration::from_millis(1000 / TARGET_FPS as u64);

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
pub const PLAYER_SPEED: f32 = 300.0;
pub const START_LIVES: i32 = 3;

pub const MISSILE_WIDTH: f32 = 5.0;
pub const MISSILE_HEIGHT: f32 = 15.0;
/// Negative = upward.
pub const MISSILE_SPEED: f32 = -500.0;
pub const MISSILE_COOLDOWN: Duration = Duration::from_millis(500);

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 150.0;
pub const ENEMY_SCORE: u32 = 10;

/// Spawn gate: interval shrinks from this base by score/10 ms, never below the floor.
pub const SPAWN_BASE_MS: u64 = 1500;
pub const SPAWN_FLOOR_MS: u64 = 200;

pub const EXPLOSION_SIZE: f32 = 40.0;
pub const EXPLOSION_FRAME_TIME: f32 = 0.050;
