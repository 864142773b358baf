//! Shared entity model: kind tags, the collision capability and components
//! reused across entity kinds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Closed set of entity kinds known to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Bullet,
    Particle,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Player,
        EntityKind::Enemy,
        EntityKind::Bullet,
        EntityKind::Particle,
    ];

    /// Row/column of this kind in the collision policy table
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            EntityKind::Player => 0,
            EntityKind::Enemy => 1,
            EntityKind::Bullet => 2,
            EntityKind::Particle => 3,
        }
    }
}

/// Anything the collision system can look at
pub trait Collidable {
    fn kind(&self) -> EntityKind;
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn is_active(&self) -> bool;
}

/// Hit points with a fixed maximum. Never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Remaining health in `[0, 1]` (0 when `max` is zero)
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Cooldown-gated gun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: i32,
    /// Minimum seconds between shots
    pub fire_rate: f32,
    pub bullet_speed: f32,
    /// Seconds since the last shot, saturating at `fire_rate`
    pub since_last_shot: f32,
}

impl Weapon {
    /// Ready to fire immediately
    pub fn new(damage: i32, fire_rate: f32, bullet_speed: f32) -> Self {
        Self {
            damage,
            fire_rate,
            bullet_speed,
            since_last_shot: fire_rate,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.since_last_shot = (self.since_last_shot + dt).min(self.fire_rate);
    }

    pub fn can_fire(&self) -> bool {
        self.since_last_shot >= self.fire_rate
    }

    pub fn fire(&mut self) {
        self.since_last_shot = 0.0;
    }
}
