use crate::bounding_volume::Aabb;
use crate::math::{Real, DEFAULT_EPSILON, INTERSECTION_EPSILON};
use crate::shape::{Ball, Plane};

/// Are the two planes parallel?
#[inline]
pub(crate) fn planes_are_parallel(plane1: &Plane, plane2: &Plane) -> bool {
    plane1.normal.cross(&plane2.normal).norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
}

/// Intersection test between two planes.
///
/// Two planes intersect unless they are parallel and distinct.
#[inline]
pub fn intersection_test_plane_plane(plane1: &Plane, plane2: &Plane) -> bool {
    !planes_are_parallel(plane1, plane2)
        || plane1.signed_distance(&plane2.point).abs() <= INTERSECTION_EPSILON
}

/// Intersection test between a plane and a solid ball.
#[inline]
pub fn intersection_test_plane_ball(plane: &Plane, ball: &Ball) -> bool {
    plane.signed_distance(&ball.center).abs() <= ball.radius + INTERSECTION_EPSILON
}

/// The signed distance between the plane and the AABB center, and the radius of the AABB
/// projected on the plane normal.
#[inline]
pub(crate) fn plane_aabb_projection(plane: &Plane, aabb: &Aabb) -> (Real, Real) {
    let radius = aabb.half_extents().dot(&plane.normal.abs());
    (plane.signed_distance(&aabb.center()), radius)
}

/// Intersection test between a plane and a solid AABB.
#[inline]
pub fn intersection_test_plane_aabb(plane: &Plane, aabb: &Aabb) -> bool {
    let (dist, radius) = plane_aabb_projection(plane, aabb);
    dist.abs() <= radius + INTERSECTION_EPSILON
}
