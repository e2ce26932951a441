//! Definition of the triangle shape.

use crate::math::{Point, Real, Similarity, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{InvalidShape, Line, Plane};

use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        crate::utils::center(&self.vertices())
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// Is this triangle degenerate (its three vertices are collinear)?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal().is_none()
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::segment(self.a, self.b),
            Line::segment(self.b, self.c),
            Line::segment(self.c, self.a),
        ]
    }

    /// The three edge vectors of this triangle: [B - A, C - B, A - C].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// The plane supporting this triangle, if it is not degenerate.
    #[inline]
    pub fn plane(&self) -> Option<Plane> {
        self.normal().map(|n| Plane::new(self.a, n))
    }

    /// Returns a new triangle with vertices transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Similarity<Real>) -> Self {
        Triangle::new(
            m.transform_point(&self.a),
            m.transform_point(&self.b),
            m.transform_point(&self.c),
        )
    }

    /// Checks that all the coordinates of this triangle are finite.
    ///
    /// Degenerate (flat) triangles are valid shapes.
    pub fn validate(&self) -> Result<(), InvalidShape> {
        if self.vertices().iter().all(|p| p.iter().all(|e| e.is_finite())) {
            Ok(())
        } else {
            Err(InvalidShape::NonFinite)
        }
    }
}
