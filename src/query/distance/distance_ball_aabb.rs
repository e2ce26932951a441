use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::Ball;

/// Distance between two balls.
#[inline]
pub fn distance_ball_ball(ball1: &Ball, ball2: &Ball) -> Real {
    (na::distance(&ball1.center, &ball2.center) - ball1.radius - ball2.radius).max(0.0)
}

/// Distance between a ball and an AABB.
#[inline]
pub fn distance_ball_aabb(ball: &Ball, aabb: &Aabb) -> Real {
    (aabb.distance_to_local_point(&ball.center) - ball.radius).max(0.0)
}

/// Distance between two AABBs.
#[inline]
pub fn distance_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> Real {
    let gap1 = aabb2.mins - aabb1.maxs;
    let gap2 = aabb1.mins - aabb2.maxs;
    gap1.sup(&gap2).sup(&Vector::zeros()).norm()
}
