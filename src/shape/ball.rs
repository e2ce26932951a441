use crate::math::{Point, Real, Similarity};
use crate::shape::InvalidShape;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// Returns a new ball transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Similarity<Real>) -> Self {
        Ball::new(
            m.transform_point(&self.center),
            self.radius * m.scaling().abs(),
        )
    }

    /// Does this ball contain the point `pt`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// Checks that this ball has finite coordinates and a non-negative radius.
    pub fn validate(&self) -> Result<(), InvalidShape> {
        if !self.center.iter().all(|e| e.is_finite()) || !self.radius.is_finite() {
            Err(InvalidShape::NonFinite)
        } else if self.radius < 0.0 {
            Err(InvalidShape::NegativeRadius)
        } else {
            Ok(())
        }
    }
}
