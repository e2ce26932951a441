use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::INTERSECTION_EPSILON;
use crate::shape::Ball;

/// Intersection test between two balls.
#[inline]
pub fn intersection_test_ball_ball(ball1: &Ball, ball2: &Ball) -> bool {
    let r = ball1.radius + ball2.radius + INTERSECTION_EPSILON;
    na::distance_squared(&ball1.center, &ball2.center) <= r * r
}

/// Intersection test between a ball and an AABB.
#[inline]
pub fn intersection_test_ball_aabb(ball: &Ball, aabb: &Aabb) -> bool {
    aabb.distance_to_local_point(&ball.center) <= ball.radius + INTERSECTION_EPSILON
}

/// Intersection test between two AABBs.
///
/// Touching AABBs intersect. Empty AABBs don’t intersect anything.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    !aabb1.is_empty() && !aabb2.is_empty() && aabb1.intersects(aabb2)
}
