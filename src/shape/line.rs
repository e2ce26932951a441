//! Definition of the line shape.

use crate::math::{Point, Real, Similarity, Vector, DEFAULT_EPSILON};
use crate::shape::InvalidShape;

/// A parametric line `origin + dir * t`, restricted to `t ∈ [min, max]`.
///
/// Depending on its bounds, a line represents:
/// - a point if `min == max`;
/// - a segment if both bounds are finite;
/// - a ray if exactly one bound is infinite;
/// - a full line if both bounds are infinite.
///
/// Only points and segments are bounded, hence only them can be registered into a
/// [`SpatialIndex`](crate::partitioning::SpatialIndex). Rays and lines are query-only shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Line {
    /// The point at `t = 0`.
    pub origin: Point<Real>,
    /// The direction of the line. It doesn’t have to be normalized.
    pub dir: Vector<Real>,
    /// The lower bound of the parameter.
    pub min: Real,
    /// The upper bound of the parameter.
    pub max: Real,
}

impl Line {
    /// Creates a new line from its origin, direction and parameter bounds.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>, min: Real, max: Real) -> Self {
        Self {
            origin,
            dir,
            min,
            max,
        }
    }

    /// A line reduced to a single point.
    #[inline]
    pub fn point(point: Point<Real>) -> Self {
        Self::new(point, Vector::x(), 0.0, 0.0)
    }

    /// The segment going from `a` to `b`.
    ///
    /// The resulting line has a normalized direction and `t ∈ [0, |b - a|]`. If `a` and `b`
    /// are (almost) equal, the result is a point.
    pub fn segment(a: Point<Real>, b: Point<Real>) -> Self {
        let ab = b - a;
        let length = ab.norm();

        if length <= DEFAULT_EPSILON {
            Self::point(a)
        } else {
            Self::new(a, ab / length, 0.0, length)
        }
    }

    /// The half-line starting at `origin` and extending infinitely along `dir`.
    #[inline]
    pub fn ray(origin: Point<Real>, dir: Vector<Real>) -> Self {
        Self::new(origin, dir, 0.0, Real::INFINITY)
    }

    /// The infinite line passing through `origin` with direction `dir`.
    #[inline]
    pub fn line(origin: Point<Real>, dir: Vector<Real>) -> Self {
        Self::new(origin, dir, Real::NEG_INFINITY, Real::INFINITY)
    }

    /// Is this line reduced to a single point?
    #[inline]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Are both bounds finite?
    #[inline]
    pub fn is_segment(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Is exactly one bound infinite?
    #[inline]
    pub fn is_ray(&self) -> bool {
        self.min.is_finite() != self.max.is_finite()
    }

    /// Are both bounds infinite?
    #[inline]
    pub fn is_line(&self) -> bool {
        !self.min.is_finite() && !self.max.is_finite()
    }

    /// Is this line bounded (i.e., a point or a segment)?
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.is_segment()
    }

    /// The point at the parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// The point at the lower bound, if it is finite.
    #[inline]
    pub fn a(&self) -> Option<Point<Real>> {
        self.min.is_finite().then(|| self.point_at(self.min))
    }

    /// The point at the upper bound, if it is finite.
    #[inline]
    pub fn b(&self) -> Option<Point<Real>> {
        self.max.is_finite().then(|| self.point_at(self.max))
    }

    /// Clamps `t` to the bounds of this line.
    #[inline]
    pub fn clamp_parameter(&self, t: Real) -> Real {
        t.max(self.min).min(self.max)
    }

    /// Is the direction of this line unit-length?
    #[inline]
    pub fn is_normalized(&self) -> bool {
        relative_eq!(self.dir.norm_squared(), 1.0, epsilon = 1.0e-4)
    }

    /// This same line, reparametrized so that its direction is unit-length.
    ///
    /// Returns `None` if the direction is zero and the line is not a point.
    pub fn normalized(&self) -> Option<Self> {
        let length = self.dir.norm();

        if length <= DEFAULT_EPSILON {
            return self.is_point().then(|| Self::point(self.point_at(self.min)));
        }

        Some(Self::new(
            self.origin,
            self.dir / length,
            self.min * length,
            self.max * length,
        ))
    }

    /// Returns a new line transformed by `m`.
    ///
    /// The direction is rotated and the parameter bounds are multiplied by the scale, so that
    /// a normalized line stays normalized.
    pub fn transformed(&self, m: &Similarity<Real>) -> Self {
        let origin = m.transform_point(&self.origin);
        let dir = m.isometry.rotation * self.dir;
        let scale = m.scaling();
        let (min, max) = if scale >= 0.0 {
            (self.min * scale, self.max * scale)
        } else {
            (self.max * scale, self.min * scale)
        };

        Self::new(origin, dir, min, max)
    }

    /// Checks that this line is made of finite coordinates, non-inverted bounds and, unless it is
    /// a point, a non-zero direction.
    pub fn validate(&self) -> Result<(), InvalidShape> {
        if !self.origin.iter().chain(self.dir.iter()).all(|e| e.is_finite())
            || self.min.is_nan()
            || self.max.is_nan()
            || (self.is_point() && !self.min.is_finite())
        {
            return Err(InvalidShape::NonFinite);
        }

        if self.min > self.max {
            return Err(InvalidShape::InvertedBounds);
        }

        if !self.is_point() && self.dir.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
            return Err(InvalidShape::DegenerateDirection);
        }

        Ok(())
    }
}
