//! 2D vector math
//!
//! `Vector2` is `glam::Vec2`, which already covers add/sub/mul, length,
//! `length_squared`, `distance`, `distance_squared`, `dot`, `lerp` and
//! `normalize_or_zero`. The helpers here fill the gaps with the degenerate-case
//! policy the simulation relies on: dividing by zero or clamping against
//! inverted bounds yields a well-defined value instead of a NaN or a panic.

use glam::Vec2;

/// 2D vector used for positions and velocities
pub type Vector2 = Vec2;

/// Extra vector operations with total (never-failing) semantics
pub trait VectorExt: Sized {
    /// Divide by a scalar; a zero divisor returns the zero vector
    fn div_or_zero(self, scalar: f32) -> Self;

    /// Angle of the vector in radians, measured from +X toward +Y
    fn heading(self) -> f32;

    /// Rotate counter-clockwise by `radians`
    fn rotated(self, radians: f32) -> Self;

    /// Clamp each component into `[min, max]`.
    ///
    /// Unlike `Vec2::clamp`, inverted bounds never panic: the lower bound is
    /// applied first, then the upper bound wins.
    fn clamp_between(self, min: Self, max: Self) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn div_or_zero(self, scalar: f32) -> Self {
        if scalar == 0.0 {
            return Vec2::ZERO;
        }
        self / scalar
    }

    #[inline]
    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn clamp_between(self, min: Self, max: Self) -> Self {
        Vec2::new(self.x.max(min.x).min(max.x), self.y.max(min.y).min(max.y))
    }
}
