//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_ball_aabb::{
    intersection_test_aabb_aabb, intersection_test_ball_aabb, intersection_test_ball_ball,
};
pub(crate) use self::intersection_test_line::line_plane_signed_distance_range;
pub use self::intersection_test_line::{
    intersection_test_line_aabb, intersection_test_line_ball, intersection_test_line_line,
    intersection_test_line_plane, intersection_test_line_triangle,
};
pub(crate) use self::intersection_test_plane::{plane_aabb_projection, planes_are_parallel};
pub use self::intersection_test_plane::{
    intersection_test_plane_aabb, intersection_test_plane_ball, intersection_test_plane_plane,
};
pub(crate) use self::intersection_test_triangle::triangle_plane_signed_distance_range;
pub use self::intersection_test_triangle::{
    intersection_test_triangle_aabb, intersection_test_triangle_ball,
    intersection_test_triangle_plane, intersection_test_triangle_triangle,
};

mod intersection_test_ball_aabb;
mod intersection_test_line;
mod intersection_test_plane;
mod intersection_test_triangle;
