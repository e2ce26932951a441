use crate::math::{Point, Real};

/// A conservative volume enclosing a shape, used by the broad phase.
///
/// The broad phase of the [`SpatialIndex`](crate::partitioning::SpatialIndex) and of the
/// collider meshes only relies on the operations below, all of them being cheap compared to an
/// exact shape test.
pub trait BoundingVolume {
    /// The center of this volume.
    fn center(&self) -> Point<Real>;

    /// Do the two volumes overlap? Volumes sharing only a boundary overlap.
    fn intersects(&self, _: &Self) -> bool;

    /// Is `other` fully inside this volume? The boundaries may coincide.
    fn contains(&self, other: &Self) -> bool;

    /// Grows this volume so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// Pushes every face of this volume outward by `margin`.
    fn loosen(&mut self, margin: Real);

    /// A copy of this volume with every face pushed outward by `margin`.
    fn loosened(&self, margin: Real) -> Self;
}
