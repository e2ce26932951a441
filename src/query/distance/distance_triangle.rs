use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::query::details::{distance_line_line, triangle_plane_signed_distance_range};
use crate::query::point::distance_point_triangle;
use crate::query::sat;
use crate::shape::{Ball, Line, Plane, Triangle};

/// Distance between two triangles computed from their features only: every pair of edges, and
/// every vertex of one against the other.
///
/// This is the exact distance if the triangles don’t intersect.
pub(crate) fn triangle_triangle_features_distance(tri1: &Triangle, tri2: &Triangle) -> Real {
    let edges1 = tri1.edges();
    let edges2 = tri2.edges();
    let mut dist = Real::MAX;

    for e1 in &edges1 {
        for e2 in &edges2 {
            dist = dist.min(distance_line_line(e1, e2));
        }
    }

    for pt in &tri1.vertices() {
        dist = dist.min(distance_point_triangle(tri2, pt));
    }

    for pt in &tri2.vertices() {
        dist = dist.min(distance_point_triangle(tri1, pt));
    }

    dist
}

/// Distance between two solid triangles.
pub fn distance_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> Real {
    if !tri1.is_degenerate()
        && !tri2.is_degenerate()
        && sat::triangle_triangle_find_separating_axis(tri1, tri2, 0.0).is_none()
    {
        return 0.0;
    }

    triangle_triangle_features_distance(tri1, tri2)
}

/// Distance between a solid triangle and a plane.
#[inline]
pub fn distance_triangle_plane(tri: &Triangle, plane: &Plane) -> Real {
    let (min, max) = triangle_plane_signed_distance_range(tri, plane);

    if min <= 0.0 && max >= 0.0 {
        0.0
    } else {
        min.abs().min(max.abs())
    }
}

/// Distance between a solid triangle and a solid ball.
#[inline]
pub fn distance_triangle_ball(tri: &Triangle, ball: &Ball) -> Real {
    (distance_point_triangle(tri, &ball.center) - ball.radius).max(0.0)
}

/// Distance between a solid triangle and a solid AABB.
pub fn distance_triangle_aabb(tri: &Triangle, aabb: &Aabb) -> Real {
    if sat::aabb_triangle_find_separating_axis(aabb, tri, 0.0).is_none() {
        return 0.0;
    }

    let box_vtx = aabb.vertices();
    let mut dist = Real::MAX;

    for edge in &tri.edges() {
        for (a, b) in &Aabb::EDGES_VERTEX_IDS {
            let box_edge = Line::segment(box_vtx[*a], box_vtx[*b]);
            dist = dist.min(distance_line_line(edge, &box_edge));
        }
    }

    for pt in &tri.vertices() {
        dist = dist.min(aabb.distance_to_local_point(pt));
    }

    for pt in &box_vtx {
        dist = dist.min(distance_point_triangle(tri, pt));
    }

    dist
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};

    fn tri(z: Real) -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, z),
            Point::new(1.0, 0.0, z),
            Point::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn triangle_triangle_distances() {
        assert_relative_eq!(distance_triangle_triangle(&tri(0.0), &tri(2.0)), 2.0);
        assert_eq!(distance_triangle_triangle(&tri(0.0), &tri(0.0)), 0.0);

        let side = Triangle::new(
            Point::new(3.0, 0.0, 0.0),
            Point::new(4.0, 0.0, 0.0),
            Point::new(3.0, 1.0, 0.0),
        );
        assert_relative_eq!(distance_triangle_triangle(&tri(0.0), &side), 2.0);
    }

    #[test]
    fn triangle_plane_distances() {
        let plane = Plane::new(Point::new(0.0, 0.0, 5.0), Vector::z_axis());
        assert_relative_eq!(distance_triangle_plane(&tri(1.0), &plane), 4.0);
        assert_relative_eq!(distance_triangle_plane(&tri(7.0), &plane), 2.0);
    }

    #[test]
    fn triangle_aabb_distances() {
        let aabb = Aabb::new(Point::new(-1.0, -1.0, -3.0), Point::new(0.5, 0.5, -1.0));
        assert_relative_eq!(distance_triangle_aabb(&tri(0.0), &aabb), 1.0);

        let edge_to_edge = Aabb::new(Point::new(1.0, 1.0, -1.0), Point::new(2.0, 2.0, 1.0));
        assert_relative_eq!(
            distance_triangle_aabb(&tri(0.0), &edge_to_edge),
            (0.5 as Real).sqrt(),
            epsilon = 1.0e-6
        );
    }
}
