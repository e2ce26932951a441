//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::intersection_test()`](intersection_test()) to determine if two shapes are
//!   intersecting or not.
//! * [`query::distance()`](distance()) to compute the distance between two shapes.
//!
//! Queries between shapes and triangle-mesh colliders go through a [`CollisionDispatcher`], the
//! [`DefaultCollisionDispatcher`] being the one used by the
//! [`CollisionQuery`](crate::pipeline::CollisionQuery) unless told otherwise.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above. For example `distance_ball_ball` computes the distance between two balls.
//! The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` is `intersection_test` or `distance`.
//! * `[shape1]` and `[shape2]` are the types of the shapes passed to the function, e.g., `line`,
//!   `triangle`, `plane`, `ball` or `aabb`.

pub use self::default_query_dispatcher::{ContinuousCollisionConfig, DefaultCollisionDispatcher};
pub use self::distance::distance;
pub use self::error::QueryError;
pub use self::intersection_test::intersection_test;
pub use self::query_dispatcher::{
    CollisionDispatcher, CollisionPair, ContinuousCollision, ContinuousCollisionParams, LineHit,
};

pub mod closest_points;
mod default_query_dispatcher;
mod distance;
mod error;
mod intersection_test;
pub mod point;
mod query_dispatcher;
pub mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub(crate) use super::distance::triangle_triangle_features_distance;
    pub use super::distance::{
        distance_aabb_aabb, distance_ball_aabb, distance_ball_ball, distance_line_aabb,
        distance_line_ball, distance_line_line, distance_line_plane, distance_line_triangle,
        distance_plane_aabb, distance_plane_ball, distance_plane_plane, distance_triangle_aabb,
        distance_triangle_ball, distance_triangle_plane, distance_triangle_triangle,
    };
    pub(crate) use super::intersection_test::{
        line_plane_signed_distance_range, plane_aabb_projection, planes_are_parallel,
        triangle_plane_signed_distance_range,
    };
    pub use super::intersection_test::{
        intersection_test_aabb_aabb, intersection_test_ball_aabb, intersection_test_ball_ball,
        intersection_test_line_aabb, intersection_test_line_ball, intersection_test_line_line,
        intersection_test_line_plane, intersection_test_line_triangle,
        intersection_test_plane_aabb, intersection_test_plane_ball, intersection_test_plane_plane,
        intersection_test_triangle_aabb, intersection_test_triangle_ball,
        intersection_test_triangle_plane, intersection_test_triangle_triangle,
    };
}
