use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::closest_points::closest_points_line_line;
use crate::query::details::line_plane_signed_distance_range;
use crate::query::point::{distance_point_line, distance_point_triangle};
use crate::query::ray::{cast_line_triangle, clip_line_aabb};
use crate::shape::{Ball, Line, Plane, Triangle};

/// The finite endpoints of a line.
fn endpoints(line: &Line) -> impl Iterator<Item = Point<Real>> {
    [line.a(), line.b()].into_iter().flatten()
}

/// Distance between two lines, segments or rays.
#[inline]
pub fn distance_line_line(line1: &Line, line2: &Line) -> Real {
    let (p1, p2) = closest_points_line_line(line1, line2);
    na::distance(&p1, &p2)
}

/// Distance between a line and a solid triangle.
pub fn distance_line_triangle(line: &Line, triangle: &Triangle) -> Real {
    if cast_line_triangle(line, triangle).is_some() {
        return 0.0;
    }

    // The closest points involve either an edge of the triangle or an endpoint of the line.
    let edges_dist = triangle
        .edges()
        .iter()
        .map(|edge| distance_line_line(line, edge))
        .fold(Real::MAX, Real::min);

    endpoints(line)
        .map(|pt| distance_point_triangle(triangle, &pt))
        .fold(edges_dist, Real::min)
}

/// Distance between a line and a plane.
#[inline]
pub fn distance_line_plane(line: &Line, plane: &Plane) -> Real {
    let (min, max) = line_plane_signed_distance_range(line, plane);

    if min <= 0.0 && max >= 0.0 {
        0.0
    } else {
        min.abs().min(max.abs())
    }
}

/// Distance between a line and a solid ball.
#[inline]
pub fn distance_line_ball(line: &Line, ball: &Ball) -> Real {
    (distance_point_line(line, &ball.center) - ball.radius).max(0.0)
}

/// Distance between a line and a solid AABB.
pub fn distance_line_aabb(line: &Line, aabb: &Aabb) -> Real {
    if clip_line_aabb(line, aabb).is_some() {
        return 0.0;
    }

    let vtx = aabb.vertices();
    let edges_dist = Aabb::EDGES_VERTEX_IDS
        .iter()
        .map(|(a, b)| distance_line_line(line, &Line::segment(vtx[*a], vtx[*b])))
        .fold(Real::MAX, Real::min);

    endpoints(line)
        .map(|pt| aabb.distance_to_local_point(&pt))
        .fold(edges_dist, Real::min)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector;

    #[test]
    fn line_triangle_distances() {
        let tri = Triangle::new(
            Point::origin(),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        );

        let above = Line::segment(Point::new(0.5, 0.5, 1.0), Point::new(0.5, 0.5, 3.0));
        assert_relative_eq!(distance_line_triangle(&above, &tri), 1.0);

        let crossing = Line::line(Point::new(0.5, 0.5, 1.0), Vector::z());
        assert_eq!(distance_line_triangle(&crossing, &tri), 0.0);

        let beside = Line::line(Point::new(-1.0, 0.0, 5.0), Vector::z());
        assert_relative_eq!(distance_line_triangle(&beside, &tri), 1.0);

        let coplanar = Line::line(Point::new(0.5, -1.0, 0.0), Vector::y());
        assert_eq!(distance_line_triangle(&coplanar, &tri), 0.0);
    }

    #[test]
    fn line_plane_distances() {
        let plane = Plane::new(Point::origin(), Vector::z_axis());
        let ray = Line::ray(Point::new(0.0, 0.0, 2.0), Vector::new(1.0, 0.0, 1.0));
        assert_relative_eq!(distance_line_plane(&ray, &plane), 2.0);

        let back = Line::ray(Point::new(0.0, 0.0, 2.0), Vector::new(1.0, 0.0, -1.0));
        assert_eq!(distance_line_plane(&back, &plane), 0.0);

        let parallel = Line::line(Point::new(0.0, 0.0, 2.0), Vector::x());
        assert_relative_eq!(distance_line_plane(&parallel, &plane), 2.0);
    }

    #[test]
    fn line_aabb_distances() {
        let aabb = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));
        let diag = Line::line(Point::new(3.0, 3.0, 0.5), Vector::new(1.0, -1.0, 0.0));
        assert_relative_eq!(
            distance_line_aabb(&diag, &aabb),
            (2.0 as Real).sqrt() * 2.0,
            epsilon = 1.0e-5
        );

        let pt = Line::point(Point::new(0.5, 0.5, 3.0));
        assert_relative_eq!(distance_line_aabb(&pt, &aabb), 2.0);
    }
}
