use crate::math::{Point, Real, Vector};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// ```
/// use spatial3d::utils::center;
/// use spatial3d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(3.0, 0.0, 0.0),
///     Point::new(0.0, 3.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 1.0).abs() < 1e-6);
/// assert!((c.y - 1.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));
    let sum = pts
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords);

    Point::from(sum * denom)
}
