//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform concerns:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Collections are mutated in two phases (update, then prune)

pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod particle;
pub mod phase;
pub mod player;
pub mod starfield;
pub mod state;
pub mod tick;
pub mod vector;

pub use bullet::{Bullet, BulletOwner};
pub use collision::{
    COLLISION_POLICY, Collider, CollisionPair, CollisionSystem, EntityRef, circles_overlap,
    should_collide,
};
pub use enemy::{Enemy, EnemyKind, EnemyStats, MovePattern};
pub use entity::{Collidable, EntityKind, Health, Weapon};
pub use particle::{EXPLOSION_PALETTE, Particle, spawn_explosion, spawn_trail};
pub use phase::{GamePhase, StateManager};
pub use player::Player;
pub use starfield::{Star, Starfield};
pub use state::{GameState, Snapshot};
pub use tick::{TickInput, tick};
pub use vector::{Vector2, VectorExt};
