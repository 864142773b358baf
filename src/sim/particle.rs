//! Cosmetic particles and the effect generators that emit them
//!
//! Particles never take part in gameplay collisions.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, EntityKind};
use crate::Rgba;
use crate::consts::*;

/// Warm palette used for explosions
pub const EXPLOSION_PALETTE: [Rgba; 4] = [
    [255, 200, 0, 255],
    [255, 150, 0, 255],
    [255, 100, 0, 255],
    [200, 50, 0, 255],
];

const TRAIL_COLOR: Rgba = [100, 200, 255, 200];

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub size: f32,
    pub color: Rgba,
    /// Seconds since emission
    pub age: f32,
    pub max_life: f32,
    /// Renderer hint: fade out over the lifetime
    pub fade: bool,
    pub active: bool,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgba, size: f32, max_life: f32) -> Self {
        Self {
            pos,
            vel,
            radius: size / 2.0,
            size,
            color,
            age: 0.0,
            max_life,
            fade: true,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.pos += self.vel * dt;
        self.vel *= PARTICLE_DRAG;

        if self.age >= self.max_life {
            self.active = false;
        }
    }

    /// Fraction of lifetime remaining, in `[0, 1]`
    pub fn life_fraction(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age / self.max_life).clamp(0.0, 1.0)
    }
}

impl Collidable for Particle {
    fn kind(&self) -> EntityKind {
        EntityKind::Particle
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

/// Burst of `count` particles flying outward from `pos`
pub fn spawn_explosion(rng: &mut impl Rng, pos: Vec2, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let speed: f32 = rng.random_range(50.0..200.0);
            let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
            let color = EXPLOSION_PALETTE[rng.random_range(0..EXPLOSION_PALETTE.len())];
            let size: f32 = rng.random_range(2.0..6.0);
            let life: f32 = rng.random_range(0.3..1.0);
            Particle::new(pos, Vec2::from_angle(angle) * speed, color, size, life)
        })
        .collect()
}

/// Single exhaust particle drifting against the parent's motion
pub fn spawn_trail(rng: &mut impl Rng, pos: Vec2, vel: Vec2) -> Particle {
    let size: f32 = rng.random_range(2.0..4.0);
    let life: f32 = rng.random_range(0.2..0.5);
    Particle::new(pos, vel * TRAIL_VELOCITY_SCALE, TRAIL_COLOR, size, life)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_drag_and_expiry() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(100.0, 0.0), TRAIL_COLOR, 4.0, 0.45);
        assert_eq!(p.radius, 2.0);

        p.update(0.1);
        assert!((p.pos.x - 10.0).abs() < 1e-4);
        assert!((p.vel.x - 98.0).abs() < 1e-4);
        assert!(p.active);

        for _ in 0..4 {
            p.update(0.1);
        }
        assert!(!p.active);
    }

    #[test]
    fn test_explosion_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        let origin = Vec2::new(100.0, 200.0);
        let particles = spawn_explosion(&mut rng, origin, EXPLOSION_PARTICLES);

        assert_eq!(particles.len(), EXPLOSION_PARTICLES);
        for p in &particles {
            assert_eq!(p.pos, origin);
            let speed = p.vel.length();
            assert!((49.9..200.1).contains(&speed), "speed {speed}");
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.3..1.0).contains(&p.max_life));
            assert!(EXPLOSION_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_trail_opposes_parent() {
        let mut rng = Pcg32::seed_from_u64(1);
        let trail = spawn_trail(&mut rng, Vec2::new(5.0, 5.0), Vec2::new(0.0, -500.0));
        assert!(trail.vel.x.abs() < 1e-6);
        assert!((trail.vel.y - 150.0).abs() < 1e-3);
        assert!((0.2..0.5).contains(&trail.max_life));
    }
}
