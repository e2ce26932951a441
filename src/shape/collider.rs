use crate::bounding_volume::Aabb;
use crate::partitioning::Bvh;
use crate::shape::Triangle;

/// A rigid triangle soup that can be registered into a
/// [`CollisionRegistry`](crate::pipeline::CollisionRegistry).
///
/// Colliders are immutable once shared: the registry and the queries only ever read them through
/// an `Arc<dyn Collider>`. All the methods work in the collider's local space.
pub trait Collider: Send + Sync {
    /// The AABB bounding all the triangles of this collider.
    fn local_aabb(&self) -> Aabb;

    /// The triangles of this collider.
    fn triangles(&self) -> &[Triangle];

    /// An optional acceleration structure whose leaf items are indices into
    /// [`Collider::triangles`].
    ///
    /// When this returns `None`, the narrow-phase tests every triangle of the collider.
    fn triangles_bvh(&self) -> Option<&Bvh> {
        None
    }

    /// The triangle with index `i`.
    fn triangle(&self, i: u32) -> Triangle {
        self.triangles()[i as usize]
    }

    /// The number of triangles of this collider.
    fn num_triangles(&self) -> usize {
        self.triangles().len()
    }
}
