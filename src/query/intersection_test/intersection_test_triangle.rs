use crate::bounding_volume::Aabb;
use crate::math::{Real, INTERSECTION_EPSILON};
use crate::query::details::triangle_triangle_features_distance;
use crate::query::point::distance_point_triangle;
use crate::query::sat;
use crate::shape::{Ball, Plane, Triangle};

/// Intersection test between two solid triangles.
pub fn intersection_test_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> bool {
    if tri1.is_degenerate() || tri2.is_degenerate() {
        triangle_triangle_features_distance(tri1, tri2) <= INTERSECTION_EPSILON
    } else {
        sat::triangle_triangle_find_separating_axis(tri1, tri2, INTERSECTION_EPSILON).is_none()
    }
}

/// The range of signed distances between a plane and the vertices of a triangle.
pub(crate) fn triangle_plane_signed_distance_range(tri: &Triangle, plane: &Plane) -> (Real, Real) {
    tri.vertices()
        .iter()
        .map(|pt| plane.signed_distance(pt))
        .fold((Real::MAX, -Real::MAX), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

/// Intersection test between a triangle and a plane.
///
/// The triangle intersects the plane if its vertices are on both sides of it, or if at least
/// one of them lies on the plane.
#[inline]
pub fn intersection_test_triangle_plane(tri: &Triangle, plane: &Plane) -> bool {
    let (min, max) = triangle_plane_signed_distance_range(tri, plane);
    min <= INTERSECTION_EPSILON && max >= -INTERSECTION_EPSILON
}

/// Intersection test between a solid triangle and a solid ball.
#[inline]
pub fn intersection_test_triangle_ball(tri: &Triangle, ball: &Ball) -> bool {
    distance_point_triangle(tri, &ball.center) <= ball.radius + INTERSECTION_EPSILON
}

/// Intersection test between a solid triangle and a solid AABB.
#[inline]
pub fn intersection_test_triangle_aabb(tri: &Triangle, aabb: &Aabb) -> bool {
    sat::aabb_triangle_find_separating_axis(aabb, tri, INTERSECTION_EPSILON).is_none()
}
