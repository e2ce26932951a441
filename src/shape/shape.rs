use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Similarity};
use crate::query;
use crate::shape::{Ball, Line, Plane, Triangle};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A point, segment, ray or infinite line.
    Line,
    /// A triangle shape.
    Triangle,
    /// An infinite plane.
    Plane,
    /// A ball shape.
    Ball,
    /// An axis-aligned box.
    Aabb,
}

/// Reasons why a shape can’t be used in an index or a query.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidShape {
    /// At least one coordinate of the shape is NaN or infinite.
    #[error("the shape has non-finite coordinates.")]
    NonFinite,
    /// The shape extends infinitely and can only be used as a query shape.
    #[error("unbounded shapes (rays, lines, planes) cannot be registered into an index.")]
    Unbounded,
    /// The normal of a plane is not unit-length.
    #[error("the plane normal is not unit-length.")]
    DegenerateNormal,
    /// The direction of a line that is not a point is zero.
    #[error("the line direction is zero.")]
    DegenerateDirection,
    /// The radius of a ball is negative.
    #[error("the ball radius is negative.")]
    NegativeRadius,
    /// The lower bounds of a line or a box are greater than its upper bounds.
    #[error("the shape has its lower bounds greater than its upper bounds.")]
    InvertedBounds,
}

/// A primitive shape.
///
/// This is the closed set of shapes that can be registered into a
/// [`SpatialIndex`](crate::partitioning::SpatialIndex) or used to query it. Every pair of shapes
/// supports an exact intersection test (see [`query::intersection_test`]).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A point, segment, ray or infinite line.
    Line(Line),
    /// A triangle.
    Triangle(Triangle),
    /// An infinite plane.
    Plane(Plane),
    /// A ball.
    Ball(Ball),
    /// An axis-aligned box.
    Aabb(Aabb),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Plane(_) => ShapeType::Plane,
            Shape::Ball(_) => ShapeType::Ball,
            Shape::Aabb(_) => ShapeType::Aabb,
        }
    }

    /// The axis-aligned bounding box of this shape.
    ///
    /// Unbounded shapes are bounded by
    /// [`HALF_MAX`](crate::bounding_volume::details::HALF_MAX) along their infinite axes.
    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Line(s) => s.local_aabb(),
            Shape::Triangle(s) => s.local_aabb(),
            Shape::Plane(s) => s.local_aabb(),
            Shape::Ball(s) => s.local_aabb(),
            Shape::Aabb(s) => *s,
        }
    }

    /// Is this shape finite along every axis?
    ///
    /// Only bounded shapes can be registered into an index.
    pub fn is_bounded(&self) -> bool {
        match self {
            Shape::Line(s) => s.is_bounded(),
            Shape::Plane(_) => false,
            Shape::Triangle(_) | Shape::Ball(_) | Shape::Aabb(_) => true,
        }
    }

    /// Exact intersection test between two shapes.
    ///
    /// Touching shapes are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Shape) -> bool {
        query::intersection_test(self, other)
    }

    /// Checks that this shape is well-formed.
    pub fn validate(&self) -> Result<(), InvalidShape> {
        match self {
            Shape::Line(s) => s.validate(),
            Shape::Triangle(s) => s.validate(),
            Shape::Plane(s) => s.validate(),
            Shape::Ball(s) => s.validate(),
            Shape::Aabb(s) => {
                if !s.is_finite() {
                    Err(InvalidShape::NonFinite)
                } else if s.is_empty() {
                    Err(InvalidShape::InvertedBounds)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Checks that this shape is well-formed and bounded, i.e., that it can be registered into an
    /// index.
    pub fn validate_bounded(&self) -> Result<(), InvalidShape> {
        self.validate()?;
        if self.is_bounded() {
            Ok(())
        } else {
            Err(InvalidShape::Unbounded)
        }
    }

    /// Returns this shape transformed by `m`.
    ///
    /// Boxes are replaced by the axis-aligned box bounding the transformed box.
    pub fn transformed(&self, m: &Similarity<Real>) -> Self {
        match self {
            Shape::Line(s) => Shape::Line(s.transformed(m)),
            Shape::Triangle(s) => Shape::Triangle(s.transformed(m)),
            Shape::Plane(s) => Shape::Plane(s.transformed(m)),
            Shape::Ball(s) => Shape::Ball(s.transformed(m)),
            Shape::Aabb(s) => Shape::Aabb(s.transform_by(m)),
        }
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<Plane> for Shape {
    fn from(s: Plane) -> Self {
        Shape::Plane(s)
    }
}

impl From<Ball> for Shape {
    fn from(s: Ball) -> Self {
        Shape::Ball(s)
    }
}

impl From<Aabb> for Shape {
    fn from(s: Aabb) -> Self {
        Shape::Aabb(s)
    }
}

/// A point is a degenerate box.
impl From<Point<Real>> for Shape {
    fn from(p: Point<Real>) -> Self {
        Shape::Aabb(Aabb::from_point(p))
    }
}
