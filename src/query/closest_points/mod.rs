//! Closest points between lines, segments and rays.

pub use self::closest_points_line_line::{
    closest_points_line_line, closest_points_line_line_parameters,
};

mod closest_points_line_line;
