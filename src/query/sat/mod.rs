//! Application of the Separating-Axis-Theorem (SAT).
//!
//! Every test takes a `margin`: the shapes are considered separated along an axis only if the
//! gap between their projections on that (normalized) axis is strictly greater than `margin`.

pub use self::sat_aabb_triangle::aabb_triangle_find_separating_axis;
pub use self::sat_triangle_triangle::triangle_triangle_find_separating_axis;

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

mod sat_aabb_triangle;
mod sat_triangle_triangle;

/// Normalizes `axis`, returns `None` if it is too small to be a reliable direction.
#[inline]
pub(crate) fn normalized_axis(axis: Vector<Real>) -> Option<UnitVector<Real>> {
    UnitVector::try_new(axis, DEFAULT_EPSILON)
}

/// The interval covered by the projections of the given points on `axis`.
#[inline]
pub(crate) fn project_points_on_axis(pts: &[Point<Real>], axis: &Vector<Real>) -> (Real, Real) {
    pts.iter()
        .map(|pt| pt.coords.dot(axis))
        .fold((Real::MAX, -Real::MAX), |(min, max), proj| {
            (min.min(proj), max.max(proj))
        })
}

/// The gap between two projection intervals. Negative if they overlap.
#[inline]
pub(crate) fn separation(interval1: (Real, Real), interval2: (Real, Real)) -> Real {
    (interval2.0 - interval1.1).max(interval1.0 - interval2.1)
}
