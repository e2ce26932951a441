//! Shapes supported by spatial3d.

pub use self::ball::Ball;
pub use self::collider::Collider;
pub use self::line::Line;
pub use self::plane::Plane;
#[doc(inline)]
pub use self::shape::{InvalidShape, Shape, ShapeType};
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshError};

mod ball;
mod collider;
mod line;
mod plane;
mod shape;
mod triangle;
mod trimesh;
