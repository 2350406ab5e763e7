mod enemy;
mod explosion;
mod groups;
mod missile;
mod phase;
mod player;

// Re-export all public types
pub use enemy::Enemy;
pub use explosion::Explosion;
pub use groups::Groups;
pub use missile::Missile;
pub use phase::Phase;
pub use player::Player;

use crate::geometry::Rect;

/// Shared capability of the self-updating entities. Each update only mutates
/// the entity itself; cross-entity effects are resolved by the frame driver.
pub trait Sprite {
    fn rect(&self) -> Rect;

    /// Advances the entity by `dt` seconds of elapsed time.
    fn update(&mut self, dt: f32);

    /// True once the entity has marked itself for removal.
    fn is_destroyed(&self) -> bool;
}
