//! Casting lines, segments and rays on triangles and boxes.

pub use self::ray_aabb::{cast_line_aabb, clip_line_aabb};
pub use self::ray_triangle::cast_line_triangle;

mod ray_aabb;
mod ray_triangle;
