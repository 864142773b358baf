//! Projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, EntityKind};
use crate::Rgba;
use crate::consts::*;

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    pub fn color(self) -> Rgba {
        match self {
            BulletOwner::Player => [100, 200, 255, 255],
            BulletOwner::Enemy => [255, 100, 100, 255],
        }
    }
}

/// A bullet travelling in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: i32,
    pub owner: BulletOwner,
    /// Seconds since firing
    pub age: f32,
    pub max_life: f32,
    /// Visual size hint (width, height)
    pub size: Vec2,
    pub active: bool,
    bounds: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, damage: i32, owner: BulletOwner, bounds: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BULLET_RADIUS,
            damage,
            owner,
            age: 0.0,
            max_life: BULLET_MAX_LIFE,
            size: Vec2::new(6.0, 12.0),
            active: true,
            bounds,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.pos += self.vel * dt;

        let m = BULLET_CULL_MARGIN;
        let off_screen = self.pos.x < -m
            || self.pos.x > self.bounds.x + m
            || self.pos.y < -m
            || self.pos.y > self.bounds.y + m;
        if self.age > self.max_life || off_screen {
            self.active = false;
        }
    }
}

impl Collidable for Bullet {
    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
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
