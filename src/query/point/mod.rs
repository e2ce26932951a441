//! Point projection on the primitive shapes.
//!
//! Boxes, planes and balls project points through their own methods
//! ([`Aabb::project_local_point`](crate::bounding_volume::Aabb::project_local_point),
//! [`Plane::project_point`](crate::shape::Plane::project_point), [`project_point_ball`]).

pub use self::point_line::{distance_point_line, project_point_line};
pub use self::point_triangle::{distance_point_triangle, project_point_triangle};

use crate::math::{Point, Real};
use crate::shape::Ball;

mod point_line;
mod point_triangle;

/// Projects a point on a solid ball.
#[inline]
pub fn project_point_ball(ball: &Ball, pt: &Point<Real>) -> Point<Real> {
    let dpt = pt - ball.center;
    let dist = dpt.norm();

    if dist <= ball.radius {
        *pt
    } else {
        ball.center + dpt * (ball.radius / dist)
    }
}
