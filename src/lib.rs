// Library exports for testing
pub use entities::{Enemy, Explosion, Groups, Missile, Phase, Player, Sprite};

pub mod app;
pub mod audio;
pub mod collision;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod spawner;
