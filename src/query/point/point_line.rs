use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Line;

/// Projects a point on a line, segment or ray.
///
/// Returns the parameter of the projection (clamped to the line bounds) and the projected point.
#[inline]
pub fn project_point_line(line: &Line, pt: &Point<Real>) -> (Real, Point<Real>) {
    let sq_norm = line.dir.norm_squared();

    let t = if sq_norm <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        line.clamp_parameter(0.0)
    } else {
        line.clamp_parameter(line.dir.dot(&(pt - line.origin)) / sq_norm)
    };

    (t, line.point_at(t))
}

/// The distance between a point and a line, segment or ray.
#[inline]
pub fn distance_point_line(line: &Line, pt: &Point<Real>) -> Real {
    na::distance(pt, &project_point_line(line, pt).1)
}
