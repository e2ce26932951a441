use crate::math::{Point, Real, Similarity};
use crate::shape::{Collider, Line, Shape};

/// The first point where a line hits the triangles of a collider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LineHit {
    /// The parameter of the hit along the line: the hit is at `line.point_at(toi)`.
    ///
    /// If the line direction is normalized, this is the distance between the line origin and
    /// the hit.
    pub toi: Real,
    /// The hit point, in world-space.
    pub point: Point<Real>,
    /// The index of the triangle hit.
    pub triangle: u32,
}

/// A pair of intersecting triangles, identified by their index in their respective colliders.
///
/// When the first element of the pair is not a collider (a primitive shape query), `a` is set to
/// [`INVALID_ID`](crate::pipeline::INVALID_ID).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionPair {
    /// The triangle index on the query side.
    pub a: u32,
    /// The triangle index on the registered collider side.
    pub b: u32,
}

impl CollisionPair {
    /// Creates a new pair of triangle indices.
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

/// The inputs of a continuous collision detection between a moving and a static collider.
#[derive(Copy, Clone)]
pub struct ContinuousCollisionParams<'a> {
    /// The collider in motion.
    pub moving: &'a dyn Collider,
    /// The position of the moving collider at the start of the motion (fraction 0).
    pub start: &'a Similarity<Real>,
    /// The position of the moving collider at the end of the motion (fraction 1).
    pub end: &'a Similarity<Real>,
    /// The static collider.
    pub target: &'a dyn Collider,
    /// The position of the static collider.
    pub target_pos: &'a Similarity<Real>,
}

/// The result of a continuous collision detection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContinuousCollision {
    /// The last known motion fraction, in `[0, 1]`, at which the colliders don’t intersect.
    ///
    /// Zero if they already intersect at the start of the motion.
    pub fraction_before: Real,
    /// The first known motion fraction, in `[0, 1]`, at which the colliders intersect.
    ///
    /// Always greater than or equal to `fraction_before`.
    pub fraction_contact: Real,
    /// The intersecting triangles at `fraction_contact`: `a` on the moving collider, `b` on the
    /// static one. Never empty.
    pub pairs: Vec<CollisionPair>,
}

/// Dispatcher for the narrow-phase queries between shapes and colliders.
///
/// The [`CollisionQuery`](crate::pipeline::CollisionQuery) uses this trait to resolve the exact
/// collisions among the candidates returned by its broad-phase. The
/// [`DefaultCollisionDispatcher`](crate::query::DefaultCollisionDispatcher) implements it with
/// triangle-level exact tests; custom implementations may plug a different solver.
///
/// Colliders are given with their world-space position. All inputs and outputs other than
/// triangle indices are expressed in world-space.
pub trait CollisionDispatcher: Send + Sync {
    /// Tests whether `shape` intersects any triangle of `collider`.
    fn intersection_test(&self, shape: &Shape, collider: &dyn Collider, pos: &Similarity<Real>)
        -> bool;

    /// The indices of every triangle of `collider` intersecting `shape`, in ascending order.
    fn intersecting_triangles(
        &self,
        shape: &Shape,
        collider: &dyn Collider,
        pos: &Similarity<Real>,
    ) -> Vec<u32>;

    /// Computes the first triangle of `collider` hit by `line`, i.e., the hit with the smallest
    /// parameter along the line.
    fn cast_line(&self, line: &Line, collider: &dyn Collider, pos: &Similarity<Real>)
        -> Option<LineHit>;

    /// Computes every pair of intersecting triangles between two colliders.
    ///
    /// The pairs are sorted in lexicographic order. The result is empty if the colliders don’t
    /// intersect.
    fn contact_pairs(
        &self,
        collider1: &dyn Collider,
        pos1: &Similarity<Real>,
        collider2: &dyn Collider,
        pos2: &Similarity<Real>,
    ) -> Vec<CollisionPair>;

    /// Computes the first fraction of the motion of `params.moving` at which it intersects
    /// `params.target`.
    ///
    /// Returns `None` if they don’t intersect during the whole motion.
    fn continuous_collision(
        &self,
        params: &ContinuousCollisionParams,
    ) -> Option<ContinuousCollision>;
}
