use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, INTERSECTION_EPSILON};
use crate::query::details::{distance_line_line, distance_line_triangle};
use crate::query::point::distance_point_line;
use crate::query::ray::clip_line_aabb;
use crate::shape::{Ball, Line, Plane, Triangle};

/// Intersection test between two lines, segments or rays.
#[inline]
pub fn intersection_test_line_line(line1: &Line, line2: &Line) -> bool {
    distance_line_line(line1, line2) <= INTERSECTION_EPSILON
}

/// Intersection test between a line and a solid triangle.
///
/// Lines lying in the plane of the triangle intersect it if they cross one of its edges or if
/// one of their endpoints is inside of it.
#[inline]
pub fn intersection_test_line_triangle(line: &Line, triangle: &Triangle) -> bool {
    distance_line_triangle(line, triangle) <= INTERSECTION_EPSILON
}

/// The range of signed distances between a plane and the points of a line.
///
/// The bounds may be infinite.
pub(crate) fn line_plane_signed_distance_range(line: &Line, plane: &Plane) -> (Real, Real) {
    let origin_dist = plane.signed_distance(&line.origin);
    let dir_dist = plane.normal.dot(&line.dir);

    if dir_dist == 0.0 {
        return (origin_dist, origin_dist);
    }

    let d1 = origin_dist + dir_dist * line.min;
    let d2 = origin_dist + dir_dist * line.max;
    (d1.min(d2), d1.max(d2))
}

/// Intersection test between a line and a plane.
///
/// A line parallel to the plane intersects it only if it lies on the plane.
#[inline]
pub fn intersection_test_line_plane(line: &Line, plane: &Plane) -> bool {
    let (min, max) = line_plane_signed_distance_range(line, plane);
    min <= INTERSECTION_EPSILON && max >= -INTERSECTION_EPSILON
}

/// Intersection test between a line and a solid ball.
#[inline]
pub fn intersection_test_line_ball(line: &Line, ball: &Ball) -> bool {
    distance_point_line(line, &ball.center) <= ball.radius + INTERSECTION_EPSILON
}

/// Intersection test between a line and a solid AABB.
#[inline]
pub fn intersection_test_line_aabb(line: &Line, aabb: &Aabb) -> bool {
    clip_line_aabb(line, &aabb.loosened(INTERSECTION_EPSILON)).is_some()
}
