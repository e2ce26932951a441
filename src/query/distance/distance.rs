use crate::math::Real;
use crate::query::details::*;
use crate::shape::Shape;

/// Computes the minimum distance separating two shapes.
///
/// Returns `0.0` if the shapes are touching or penetrating. The distance is symmetric:
/// `distance(a, b) == distance(b, a)`.
///
/// # Example
///
/// ```
/// use spatial3d::math::Point;
/// use spatial3d::query;
/// use spatial3d::shape::{Ball, Shape};
///
/// let ball1 = Shape::from(Ball::new(Point::origin(), 1.0));
/// let ball2 = Shape::from(Ball::new(Point::new(5.0, 0.0, 0.0), 1.0));
/// assert_eq!(query::distance(&ball1, &ball2), 3.0);
/// ```
pub fn distance(shape1: &Shape, shape2: &Shape) -> Real {
    match (shape1, shape2) {
        (Shape::Line(a), Shape::Line(b)) => distance_line_line(a, b),
        (Shape::Line(a), Shape::Triangle(b)) | (Shape::Triangle(b), Shape::Line(a)) => {
            distance_line_triangle(a, b)
        }
        (Shape::Line(a), Shape::Plane(b)) | (Shape::Plane(b), Shape::Line(a)) => {
            distance_line_plane(a, b)
        }
        (Shape::Line(a), Shape::Ball(b)) | (Shape::Ball(b), Shape::Line(a)) => {
            distance_line_ball(a, b)
        }
        (Shape::Line(a), Shape::Aabb(b)) | (Shape::Aabb(b), Shape::Line(a)) => {
            distance_line_aabb(a, b)
        }
        (Shape::Triangle(a), Shape::Triangle(b)) => distance_triangle_triangle(a, b),
        (Shape::Triangle(a), Shape::Plane(b)) | (Shape::Plane(b), Shape::Triangle(a)) => {
            distance_triangle_plane(a, b)
        }
        (Shape::Triangle(a), Shape::Ball(b)) | (Shape::Ball(b), Shape::Triangle(a)) => {
            distance_triangle_ball(a, b)
        }
        (Shape::Triangle(a), Shape::Aabb(b)) | (Shape::Aabb(b), Shape::Triangle(a)) => {
            distance_triangle_aabb(a, b)
        }
        (Shape::Plane(a), Shape::Plane(b)) => distance_plane_plane(a, b),
        (Shape::Plane(a), Shape::Ball(b)) | (Shape::Ball(b), Shape::Plane(a)) => {
            distance_plane_ball(a, b)
        }
        (Shape::Plane(a), Shape::Aabb(b)) | (Shape::Aabb(b), Shape::Plane(a)) => {
            distance_plane_aabb(a, b)
        }
        (Shape::Ball(a), Shape::Ball(b)) => distance_ball_ball(a, b),
        (Shape::Ball(a), Shape::Aabb(b)) | (Shape::Aabb(b), Shape::Ball(a)) => {
            distance_ball_aabb(a, b)
        }
        (Shape::Aabb(a), Shape::Aabb(b)) => distance_aabb_aabb(a, b),
    }
}
