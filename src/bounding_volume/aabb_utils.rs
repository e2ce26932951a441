use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// The coordinate used in place of infinity by the bounding boxes of unbounded shapes.
///
/// Half of `Real::MAX` so these boxes can still be merged, loosened or have their extents
/// computed without overflowing.
pub const HALF_MAX: Real = Real::MAX * 0.5;

/// The AABB covering the whole space, used by planes, rays and infinite lines.
#[inline]
pub fn unbounded_aabb() -> Aabb {
    let max = Point::from(Vector::repeat(HALF_MAX));
    Aabb::new(-max, max)
}

/// Computes the AABB of a set of points transformed by nothing.
///
/// Returns `None` if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let first = *it.next()?;
    let mut aabb = Aabb::from_point(first);

    for pt in it {
        aabb.take_point(*pt);
    }

    Some(aabb)
}

/// Clamps an infinite coordinate to [`HALF_MAX`].
#[inline]
pub(crate) fn clamp_to_half_max(x: Real) -> Real {
    x.clamp(-HALF_MAX, HALF_MAX)
}
