use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::query::details::{plane_aabb_projection, planes_are_parallel};
use crate::shape::{Ball, Plane};

/// Distance between two planes.
///
/// Zero unless they are parallel.
#[inline]
pub fn distance_plane_plane(plane1: &Plane, plane2: &Plane) -> Real {
    if planes_are_parallel(plane1, plane2) {
        plane1.signed_distance(&plane2.point).abs()
    } else {
        0.0
    }
}

/// Distance between a plane and a solid ball.
#[inline]
pub fn distance_plane_ball(plane: &Plane, ball: &Ball) -> Real {
    (plane.signed_distance(&ball.center).abs() - ball.radius).max(0.0)
}

/// Distance between a plane and a solid AABB.
#[inline]
pub fn distance_plane_aabb(plane: &Plane, aabb: &Aabb) -> Real {
    let (dist, radius) = plane_aabb_projection(plane, aabb);
    (dist.abs() - radius).max(0.0)
}
