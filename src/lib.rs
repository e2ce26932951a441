/*!
spatial3d
=========

**spatial3d** is a 3-dimensional spatial indexing and collision-query library written with
the rust programming language.

It provides:

- a [`SpatialIndex`](partitioning::SpatialIndex): an identifier-keyed registry of primitive
  shapes indexed by a bounding-volume hierarchy rebuilt on demand with a binned
  surface-area heuristic;
- a [`SpatialQuery`](partitioning::SpatialQuery): broad-phase + narrow-phase traversal
  returning the sorted identifiers of every shape intersecting a query shape;
- a [`CollisionRegistry`](pipeline::CollisionRegistry) of transformed triangle-mesh colliders
  and a [`CollisionQuery`](pipeline::CollisionQuery) resolving the single best collision of a
  shape, a collider, or a swept collider against that registry.

```
use spatial3d::bounding_volume::Aabb;
use spatial3d::math::Point;
use spatial3d::partitioning::{SpatialIndex, SpatialQuery};
use spatial3d::shape::Shape;

let mut index = SpatialIndex::default();
index.update(1, Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)));
index.update(2, Aabb::new(Point::new(5.0, 5.0, 5.0), Point::new(6.0, 6.0, 6.0)));
index.rebuild();

let mut query = SpatialQuery::new(&index);
let probe = Shape::from(Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(2.0, 2.0, 2.0)));
assert!(query.intersection(&probe));
assert_eq!(query.result(), &[1]);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod motion;
pub mod partitioning;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f64"))]
    pub use f32 as Real;
}

/// Aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{
        Isometry3, Matrix3, Point3, Similarity3, Translation3, UnitQuaternion, UnitVector3,
        Vector3,
    };

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The tolerance used by the exact intersection tests to absorb rounding errors on
    /// touching configurations.
    pub const INTERSECTION_EPSILON: Real = 1.0e-5;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rigid transformation type (rotation + translation).
    pub use Isometry3 as Isometry;

    /// The rigid transformation type with a uniform scale (rotation + translation + scale).
    ///
    /// This is the transform attached to every collider registered into a
    /// [`CollisionRegistry`](crate::pipeline::CollisionRegistry).
    pub use Similarity3 as Similarity;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
