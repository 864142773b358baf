//! Scrolling background stars

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A background star
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Downward scroll speed (u/s)
    pub speed: f32,
    pub size: f32,
    /// Alpha for the renderer
    pub brightness: u8,
}

impl Star {
    fn random(rng: &mut impl Rng, bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y),
            speed: rng.random_range(20.0..70.0),
            size: rng.random_range(1.0..3.0),
            brightness: rng.random_range(100..=254),
        }
    }
}

/// Field of stars that wrap to the top once they leave the bottom edge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<Star>,
    bounds: Vec2,
}

impl Starfield {
    pub fn new(rng: &mut impl Rng, count: usize, bounds: Vec2) -> Self {
        Self {
            stars: (0..count).map(|_| Star::random(rng, bounds)).collect(),
            bounds,
        }
    }

    pub fn update(&mut self, rng: &mut impl Rng, dt: f32) {
        for star in &mut self.stars {
            star.pos.y += star.speed * dt;
            if star.pos.y > self.bounds.y {
                star.pos.y = 0.0;
                star.pos.x = rng.random::<f32>() * self.bounds.x;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_stars_stay_in_bounds() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = Starfield::new(&mut rng, 50, bounds);
        assert_eq!(field.len(), 50);

        for _ in 0..2000 {
            field.update(&mut rng, 1.0 / 60.0);
        }
        for star in &field.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x <= bounds.x);
            assert!(star.pos.y >= 0.0 && star.pos.y <= bounds.y);
        }
    }

    #[test]
    fn test_star_wraps_to_top() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = Starfield::new(&mut rng, 1, bounds);
        field.stars[0].pos.y = 599.9;
        field.stars[0].speed = 60.0;
        field.update(&mut rng, 1.0 / 60.0);
        assert_eq!(field.stars[0].pos.y, 0.0);
    }
}
