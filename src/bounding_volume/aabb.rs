//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Similarity, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. It is both the bounding volume used
/// by the [`Bvh`](crate::partitioning::Bvh) nodes and one of the primitive shapes that can be
/// registered into a [`SpatialIndex`](crate::partitioning::SpatialIndex).
///
/// # Invariant
///
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`, except for the AABB returned
/// by [`Aabb::new_invalid`] which is used as the neutral element of [`BoundingVolume::merge`].
///
/// # Example
///
/// ```
/// use spatial3d::bounding_volume::{Aabb, BoundingVolume};
/// use spatial3d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
/// let b = Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(1.5, 1.5, 1.5));
/// assert!(a.intersects(&b));
/// assert_eq!(a.merged(&b).maxs, Point::new(1.5, 1.5, 1.5));
/// assert_eq!(a.surface_area(), 6.0);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The vertex indices of each edge of this `Aabb`.
    ///
    /// This gives, for each edge of this `Aabb`, the indices of its
    /// vertices when taken from the `self.vertices()` array.
    /// Here is how the faces are numbered, assuming
    /// a right-handed coordinate system:
    ///
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (4, 5),
        (5, 6),
        (7, 6),
        (4, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Creates a new AABB.
    ///
    /// The corners are reordered component-wise so that the result always satisfies
    /// `mins <= maxs`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Aabb {
        Aabb {
            mins: a.inf(&b),
            maxs: a.sup(&b),
        }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. This is useful as an initial value for AABB merging
    /// algorithms. It intersects nothing and has a surface area of zero.
    #[inline]
    pub fn new_invalid() -> Self {
        Self {
            mins: Vector::repeat(Real::MAX).into(),
            maxs: Vector::repeat(-Real::MAX).into(),
        }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The AABB of a single point (all its extents are zero).
    #[inline]
    pub fn from_point(point: Point<Real>) -> Self {
        Self {
            mins: point,
            maxs: point,
        }
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Is this AABB empty, i.e., are its bounds inverted along at least one axis?
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..DIM).any(|i| self.mins[i] > self.maxs[i])
    }

    /// Are all the coordinates of this AABB finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.mins.iter().chain(self.maxs.iter()).all(|e| e.is_finite())
    }

    /// The area of the surface of this AABB.
    ///
    /// This is the quantity minimized by the surface-area heuristic of the BVH build. Empty
    /// AABBs have a surface area of zero.
    #[inline]
    pub fn surface_area(&self) -> Real {
        if self.is_empty() {
            return 0.0;
        }
        let e = self.extents();
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    /// Computes the AABB bounding `self` transformed by `m`.
    ///
    /// The eight corners are transformed one by one, so a finite face of a box clamped to
    /// [`HALF_MAX`](crate::bounding_volume::details::HALF_MAX) on its other side keeps its
    /// precision.
    pub fn transform_by(&self, m: &Similarity<Real>) -> Self {
        Aabb::from_points(self.vertices().iter().map(|pt| m.transform_point(pt)))
    }

    /// Computes the AABB bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// The point of this AABB (solid) closest to `point`.
    #[inline]
    pub fn project_local_point(&self, point: &Point<Real>) -> Point<Real> {
        point.sup(&self.mins).inf(&self.maxs)
    }

    /// The distance between `point` and this AABB (solid, so zero inside).
    #[inline]
    pub fn distance_to_local_point(&self, point: &Point<Real>) -> Real {
        na::distance(point, &self.project_local_point(point))
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Projects every point of `Aabb` on an arbitrary axis.
    ///
    /// Returns the minimum and maximum projection values.
    pub fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        let cuboid_center = self.center().coords;
        let half_extents = self.half_extents();
        let shift = axis.abs().dot(&half_extents);
        let center = cuboid_center.dot(axis);
        (center - shift, center + shift)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::bounding_volume::BoundingVolume;
    use crate::math::{Point, Real, Similarity, Vector};

    #[test]
    fn invalid_aabb_is_neutral_for_merge() {
        let aabb = Aabb::new(Point::new(-1.0, 2.0, 0.0), Point::new(3.0, 4.0, 5.0));
        assert_eq!(Aabb::new_invalid().merged(&aabb), aabb);
        assert_eq!(Aabb::new_invalid().surface_area(), 0.0);
        assert!(!Aabb::new_invalid().intersects(&aabb));
    }

    #[test]
    fn new_reorders_corners() {
        let aabb = Aabb::new(Point::new(1.0, 0.0, 5.0), Point::new(0.0, 1.0, -5.0));
        assert_eq!(aabb.mins, Point::new(0.0, 0.0, -5.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn touching_aabbs_intersect() {
        let a = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&b.translated(&Vector::new(0.01, 0.0, 0.0))));
    }

    #[test]
    fn transform_by_similarity() {
        let aabb = Aabb::from_half_extents(Point::origin(), Vector::new(1.0, 2.0, 3.0));
        let m = Similarity::new(
            Vector::new(10.0, 0.0, 0.0),
            Vector::z() * core::f64::consts::FRAC_PI_2 as Real,
            2.0,
        );
        let transformed = aabb.transform_by(&m);
        assert_relative_eq!(transformed.center(), Point::new(10.0, 0.0, 0.0), epsilon = 1.0e-5);
        assert_relative_eq!(
            transformed.half_extents(),
            Vector::new(4.0, 2.0, 6.0),
            epsilon = 1.0e-5
        );
    }

    #[test]
    fn transform_by_keeps_finite_face_of_clamped_box() {
        use crate::bounding_volume::details::HALF_MAX;

        let ray_box = Aabb::new(Point::new(-10.0, -0.5, -0.5), Point::new(HALF_MAX, 0.5, 0.5));
        let m = Similarity::new(Vector::new(3.0, 0.0, 0.0), Vector::zeros(), 0.5);
        let transformed = ray_box.transform_by(&m);
        assert_relative_eq!(transformed.mins, Point::new(-2.0, -0.25, -0.25), epsilon = 1.0e-5);
        assert!(transformed.maxs.x > 1.0e30);
    }
}
