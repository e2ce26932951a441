use crate::bounding_volume::Aabb;
use crate::math::{Real, Similarity};
use crate::partitioning::{SpatialIndex, SpatialIndexConfig, UpdateError};
use crate::shape::Collider;
use crate::utils::hashmap::HashMap;
use alloc::sync::Arc;

/// Construction parameters of a [`CollisionRegistry`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionRegistryConfig {
    /// Parameters of the spatial index of the registry.
    pub spatial: SpatialIndexConfig,
}

/// A collider registered into a [`CollisionRegistry`], with its world-space transform.
#[derive(Clone)]
pub struct RigidItem {
    /// The shared collider.
    pub collider: Arc<dyn Collider>,
    /// The transform from the collider’s local space to world space.
    pub transform: Similarity<Real>,
}

impl RigidItem {
    /// The world-space AABB of this item.
    pub fn aabb(&self) -> Aabb {
        self.collider.local_aabb().transform_by(&self.transform)
    }
}

impl core::fmt::Debug for RigidItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RigidItem")
            .field("num_triangles", &self.collider.num_triangles())
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

/// A set of transformed colliders identified by a `u32`.
///
/// The world-space AABB of every collider is registered into a [`SpatialIndex`] under the same
/// identifier. As for the index, every mutation marks the registry as dirty until the next call
/// to [`CollisionRegistry::rebuild`].
#[derive(Clone, Debug, Default)]
pub struct CollisionRegistry {
    items: HashMap<u32, RigidItem>,
    spatial: SpatialIndex,
}

impl CollisionRegistry {
    /// Creates an empty registry.
    pub fn new(config: CollisionRegistryConfig) -> Self {
        Self {
            items: HashMap::with_capacity(config.spatial.reserve),
            spatial: SpatialIndex::new(config.spatial),
        }
    }

    /// Registers `collider` at the position `transform` with the identifier `id`, replacing any
    /// collider previously registered with the same identifier.
    ///
    /// # Panics
    /// Panics if `id` is reserved, if the collider has no triangle, or if `transform` isn’t
    /// finite with a positive scale. Use [`CollisionRegistry::try_update`] for a fallible
    /// version.
    pub fn update(&mut self, id: u32, collider: Arc<dyn Collider>, transform: Similarity<Real>) {
        if let Err(e) = self.try_update(id, collider, transform) {
            panic!("Invalid collision registry update for item {}: {}", id, e);
        }
    }

    /// Registers `collider` at the position `transform` with the identifier `id`, replacing any
    /// collider previously registered with the same identifier.
    ///
    /// The registry is left unchanged if an error is returned.
    pub fn try_update(
        &mut self,
        id: u32,
        collider: Arc<dyn Collider>,
        transform: Similarity<Real>,
    ) -> Result<(), UpdateError> {
        let scale = transform.scaling();

        if !(scale > 0.0 && scale.is_finite())
            || !transform.isometry.translation.vector.iter().all(|e| e.is_finite())
        {
            return Err(UpdateError::InvalidTransform);
        }

        let item = RigidItem {
            collider,
            transform,
        };
        self.spatial.try_update(id, item.aabb())?;
        let _ = self.items.insert(id, item);
        Ok(())
    }

    /// Removes the collider with the identifier `id`, if any.
    pub fn remove(&mut self, id: u32) -> Option<RigidItem> {
        let _ = self.spatial.remove(id);
        self.items.remove(&id)
    }

    /// Removes every collider from this registry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.spatial.clear();
    }

    /// Rebuilds the spatial index of this registry.
    pub fn rebuild(&mut self) {
        self.spatial.rebuild()
    }

    /// Has this registry been modified since its last rebuild?
    pub fn is_dirty(&self) -> bool {
        self.spatial.is_dirty()
    }

    /// The number of colliders registered.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is this registry empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The collider registered with the identifier `id`.
    pub fn get(&self, id: u32) -> Option<&RigidItem> {
        self.items.get(&id)
    }

    /// The spatial index containing the world-space AABB of every collider.
    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.spatial
    }
}

#[cfg(test)]
mod test {
    use super::{CollisionRegistry, CollisionRegistryConfig};
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Similarity, Vector};
    use crate::partitioning::UpdateError;
    use crate::shape::TriMesh;
    use alloc::sync::Arc;

    fn unit_cube() -> Arc<TriMesh> {
        Arc::new(
            TriMesh::from_aabb(&Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0))).unwrap(),
        )
    }

    #[test]
    fn update_registers_world_aabb() {
        let mut registry = CollisionRegistry::new(CollisionRegistryConfig::default());
        let pos = Similarity::new(Vector::new(10.0, 0.0, 0.0), Vector::zeros(), 2.0);
        registry.update(3, unit_cube(), pos);
        registry.update(3, unit_cube(), pos);
        assert!(registry.is_dirty());
        assert_eq!(registry.len(), 1);

        registry.rebuild();
        assert!(!registry.is_dirty());
        assert_eq!(
            registry.spatial_index().aabb(3),
            Some(Aabb::new(
                Point::new(10.0, 0.0, 0.0),
                Point::new(12.0, 2.0, 2.0)
            ))
        );

        assert!(registry.remove(3).is_some());
        assert!(registry.get(3).is_none());
        assert!(registry.is_dirty());
    }

    #[test]
    fn invalid_transforms_are_rejected() {
        let mut registry = CollisionRegistry::default();
        let flipped = Similarity::new(Vector::zeros(), Vector::zeros(), -1.0);
        assert_eq!(
            registry.try_update(1, unit_cube(), flipped),
            Err(UpdateError::InvalidTransform)
        );
        assert_eq!(
            registry.try_update(0, unit_cube(), Similarity::identity()),
            Err(UpdateError::ReservedId(0))
        );
        assert!(registry.is_empty());
    }
}
