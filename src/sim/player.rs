//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, EntityKind, Health, Weapon};
use super::tick::TickInput;
use super::vector::VectorExt;
use crate::consts::*;

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: Health,
    pub weapon: Weapon,
    pub score: u64,
    /// Enemies destroyed by this player's bullets
    pub kills: u32,
    /// Visual size hint (width, height)
    pub size: Vec2,
    /// Always true: player death is signaled through `health`
    pub active: bool,
    move_up: bool,
    move_down: bool,
    move_left: bool,
    move_right: bool,
    firing: bool,
    /// Playfield dimensions used for clamping
    bounds: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, bounds: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            health: Health::new(PLAYER_MAX_HEALTH),
            weapon: Weapon::new(PLAYER_BULLET_DAMAGE, PLAYER_FIRE_RATE, PLAYER_BULLET_SPEED),
            score: 0,
            kills: 0,
            size: Vec2::new(45.0, 55.0),
            active: true,
            move_up: false,
            move_down: false,
            move_left: false,
            move_right: false,
            firing: false,
            bounds,
        }
    }

    /// Spawn at the default start position for a playfield
    pub fn spawn(bounds: Vec2) -> Self {
        Self::new(Vec2::new(bounds.x / 2.0, bounds.y - PLAYER_SPAWN_INSET), bounds)
    }

    /// Latch this tick's movement and fire intent
    pub fn set_input(&mut self, input: &TickInput) {
        self.move_up = input.up;
        self.move_down = input.down;
        self.move_left = input.left;
        self.move_right = input.right;
        self.firing = input.fire;
    }

    pub fn update(&mut self, dt: f32) {
        self.weapon.advance(dt);

        let mut direction = Vec2::ZERO;
        if self.move_up {
            direction.y -= 1.0;
        }
        if self.move_down {
            direction.y += 1.0;
        }
        if self.move_left {
            direction.x -= 1.0;
        }
        if self.move_right {
            direction.x += 1.0;
        }

        // Diagonals are no faster than straight moves
        self.vel = direction.normalize_or_zero() * PLAYER_SPEED;
        self.pos += self.vel * dt;

        let margin = Vec2::splat(self.radius);
        self.pos = self.pos.clamp_between(margin, self.bounds - margin);
    }

    /// Fire intent is held and the weapon is off cooldown
    pub fn wants_to_fire(&self) -> bool {
        self.firing && self.weapon.can_fire()
    }

    pub fn fire_weapon(&mut self) {
        self.weapon.fire();
    }

    /// Where new bullets appear
    pub fn muzzle(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, PLAYER_MUZZLE_OFFSET)
    }

    pub fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}

impl Collidable for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
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
