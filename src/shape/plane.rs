//! Definition of the plane shape.

use crate::math::{Point, Real, Similarity, UnitVector, Vector};
use crate::shape::InvalidShape;

/// An infinite plane passing through `point` with normal `normal`.
///
/// Planes are unbounded, they can only be used as query shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point<Real>,
    /// The normal of the plane. Must be unit-length.
    pub normal: Vector<Real>,
}

impl Plane {
    /// Builds a new plane from a point it contains and its normal.
    #[inline]
    pub fn new(point: Point<Real>, normal: UnitVector<Real>) -> Plane {
        Plane {
            point,
            normal: normal.into_inner(),
        }
    }

    /// The signed distance between `pt` and this plane, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        (pt - self.point).dot(&self.normal)
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }

    /// Returns a new plane transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Similarity<Real>) -> Self {
        Plane {
            point: m.transform_point(&self.point),
            normal: m.isometry.rotation * self.normal,
        }
    }

    /// Checks that this plane has finite coordinates and a unit-length normal.
    pub fn validate(&self) -> Result<(), InvalidShape> {
        if !self
            .point
            .iter()
            .chain(self.normal.iter())
            .all(|e| e.is_finite())
        {
            return Err(InvalidShape::NonFinite);
        }

        if !relative_eq!(self.normal.norm_squared(), 1.0, epsilon = 1.0e-4) {
            return Err(InvalidShape::DegenerateNormal);
        }

        Ok(())
    }
}
