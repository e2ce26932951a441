use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Similarity, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball of radius `radius` centered at `center`.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

impl Ball {
    /// Computes the world-space AABB of this ball transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Similarity<Real>) -> Aabb {
        self.transformed(pos).local_aabb()
    }

    /// Computes the local-space AABB of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&self.center, self.radius)
    }
}
