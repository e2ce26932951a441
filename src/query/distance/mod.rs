//! Implementation details of the `distance` function.

pub use self::distance::distance;
pub use self::distance_ball_aabb::{distance_aabb_aabb, distance_ball_aabb, distance_ball_ball};
pub use self::distance_line::{
    distance_line_aabb, distance_line_ball, distance_line_line, distance_line_plane,
    distance_line_triangle,
};
pub use self::distance_plane::{distance_plane_aabb, distance_plane_ball, distance_plane_plane};
pub(crate) use self::distance_triangle::triangle_triangle_features_distance;
pub use self::distance_triangle::{
    distance_triangle_aabb, distance_triangle_ball, distance_triangle_plane,
    distance_triangle_triangle,
};

mod distance;
mod distance_ball_aabb;
mod distance_line;
mod distance_plane;
mod distance_triangle;
