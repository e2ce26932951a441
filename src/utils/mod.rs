//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::sort::{is_strictly_sorted, sort_dedup};

mod center;
pub mod hashmap;
mod sort;
