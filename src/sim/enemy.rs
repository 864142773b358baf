//! Enemy ships and their movement patterns

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, EntityKind, Health};
use crate::Rgba;
use crate::consts::*;

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
    Shooter,
}

/// How an enemy drifts sideways while descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePattern {
    Straight,
    /// Lateral speed follows `sin(age * 2)`
    Sine,
    /// Lateral direction flips every `ZIGZAG_FLIP_SECS`
    ZigZag,
}

/// Fixed per-kind stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: i32,
    /// Downward speed (u/s)
    pub speed: f32,
    pub radius: f32,
    pub score_value: u64,
    /// Visual size hint (square)
    pub size: f32,
    pub pattern: MovePattern,
    pub color: Rgba,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Basic,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Shooter,
    ];

    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Basic => EnemyStats {
                health: 20,
                speed: 100.0,
                radius: 12.0,
                score_value: 10,
                size: 24.0,
                pattern: MovePattern::Straight,
                color: [255, 100, 100, 255],
            },
            EnemyKind::Fast => EnemyStats {
                health: 10,
                speed: 200.0,
                radius: 10.0,
                score_value: 15,
                size: 20.0,
                pattern: MovePattern::ZigZag,
                color: [255, 150, 50, 255],
            },
            EnemyKind::Tank => EnemyStats {
                health: 50,
                speed: 50.0,
                radius: 20.0,
                score_value: 25,
                size: 40.0,
                pattern: MovePattern::Straight,
                color: [150, 50, 50, 255],
            },
            EnemyKind::Shooter => EnemyStats {
                health: 30,
                speed: 80.0,
                radius: 15.0,
                score_value: 20,
                size: 30.0,
                pattern: MovePattern::Sine,
                color: [200, 50, 200, 255],
            },
        }
    }
}

/// An enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: Health,
    pub speed: f32,
    pub score_value: u64,
    pub pattern: MovePattern,
    /// Seconds since spawn
    pub age: f32,
    pub active: bool,
    bounds: Vec2,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, bounds: Vec2) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            radius: stats.radius,
            health: Health::new(stats.health),
            speed: stats.speed,
            score_value: stats.score_value,
            pattern: stats.pattern,
            age: 0.0,
            active: true,
            bounds,
        }
    }

    /// Spawn a uniformly chosen kind at a random column just above the top edge
    pub fn spawn_random(rng: &mut impl Rng, bounds: Vec2) -> Self {
        let kind = EnemyKind::ALL[rng.random_range(0..EnemyKind::ALL.len())];
        let x = rng.random::<f32>() * bounds.x;
        Self::new(kind, Vec2::new(x, ENEMY_SPAWN_Y), bounds)
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;

        let lateral = match self.pattern {
            MovePattern::Straight => 0.0,
            MovePattern::Sine => (self.age * 2.0).sin() * SINE_AMPLITUDE,
            MovePattern::ZigZag => {
                let flips = (self.age / ZIGZAG_FLIP_SECS).floor() as i64;
                if flips % 2 == 0 {
                    -ZIGZAG_LATERAL_SPEED
                } else {
                    ZIGZAG_LATERAL_SPEED
                }
            }
        };
        self.vel = Vec2::new(lateral, self.speed);
        self.pos += self.vel * dt;

        if self.pos.y > self.bounds.y + ENEMY_CULL_MARGIN
            || self.pos.x < -ENEMY_CULL_MARGIN
            || self.pos.x > self.bounds.x + ENEMY_CULL_MARGIN
        {
            self.active = false;
        }
    }

    /// Apply damage. Returns true only for the hit that kills the enemy.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.active {
            return false;
        }
        self.health.damage(amount);
        if self.health.is_dead() {
            self.active = false;
            return true;
        }
        false
    }

    pub fn stats(&self) -> EnemyStats {
        self.kind.stats()
    }
}

impl Collidable for Enemy {
    fn kind(&self) -> EntityKind {
        EntityKind::Enemy
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
