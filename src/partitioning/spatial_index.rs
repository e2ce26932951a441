use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::Bvh;
use crate::pipeline::INVALID_ID;
use crate::shape::{InvalidShape, Shape};
use crate::utils::hashmap::{Entry, HashMap};
use slab::Slab;

/// Construction parameters of a [`SpatialIndex`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SpatialIndexConfig {
    /// Number of items the index can hold before reallocating.
    pub reserve: usize,
}

/// Error returned by [`SpatialIndex::try_update`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateError {
    /// The identifiers `0` and [`INVALID_ID`] can’t be registered.
    #[error("the identifier {0} is reserved.")]
    ReservedId(u32),
    /// The shape can’t be registered.
    #[error(transparent)]
    InvalidShape(#[from] InvalidShape),
    /// The transform of a collider is not finite or its scale isn’t positive.
    #[error("the collider transform must be finite with a positive scale.")]
    InvalidTransform,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct ShapeItem {
    pub id: u32,
    pub shape: Shape,
    pub aabb: Aabb,
}

/// A set of shapes identified by a `u32`, indexed by a [`Bvh`].
///
/// Every mutation marks the index as dirty: the tree is only updated by an explicit call to
/// [`SpatialIndex::rebuild`], and no [`SpatialQuery`](crate::partitioning::SpatialQuery) can be
/// created on a dirty index.
///
/// The identifiers `0` and [`INVALID_ID`] are reserved.
#[derive(Clone, Debug, Default)]
pub struct SpatialIndex {
    items: Slab<ShapeItem>,
    keys: HashMap<u32, usize>,
    bvh: Bvh,
    dirty: bool,
}

impl SpatialIndex {
    /// Creates an empty index.
    pub fn new(config: SpatialIndexConfig) -> Self {
        Self {
            items: Slab::with_capacity(config.reserve),
            keys: HashMap::with_capacity(config.reserve),
            bvh: Bvh::new(),
            dirty: false,
        }
    }

    /// Inserts the shape `shape` with the identifier `id`, replacing any shape previously
    /// registered with the same identifier.
    ///
    /// # Panics
    /// Panics if `id` is reserved, or if the shape is invalid or unbounded (see
    /// [`Shape::validate_bounded`]). Use [`SpatialIndex::try_update`] for a fallible version.
    pub fn update(&mut self, id: u32, shape: impl Into<Shape>) {
        if let Err(e) = self.try_update(id, shape) {
            panic!("Invalid spatial index update for item {}: {}", id, e);
        }
    }

    /// Inserts the shape `shape` with the identifier `id`, replacing any shape previously
    /// registered with the same identifier.
    ///
    /// The index is left unchanged if an error is returned.
    pub fn try_update(&mut self, id: u32, shape: impl Into<Shape>) -> Result<(), UpdateError> {
        if id == 0 || id == INVALID_ID {
            return Err(UpdateError::ReservedId(id));
        }

        let shape = shape.into();
        shape.validate_bounded()?;

        let item = ShapeItem {
            id,
            shape,
            aabb: shape.aabb(),
        };

        match self.keys.entry(id) {
            Entry::Occupied(entry) => self.items[*entry.get()] = item,
            Entry::Vacant(entry) => {
                let _ = entry.insert(self.items.insert(item));
            }
        }

        self.dirty = true;
        Ok(())
    }

    /// Inserts a point, registered as a degenerate box.
    ///
    /// # Panics
    /// Panics if `id` is reserved or if the point isn’t finite.
    pub fn update_point(&mut self, id: u32, point: Point<Real>) {
        self.update(id, Aabb::from_point(point))
    }

    /// Removes the shape with the identifier `id`, if any.
    ///
    /// The index is marked as dirty even if there was no such shape.
    pub fn remove(&mut self, id: u32) -> Option<Shape> {
        self.dirty = true;
        let key = self.keys.remove(&id)?;
        Some(self.items.remove(key).shape)
    }

    /// Removes every shape from this index.
    pub fn clear(&mut self) {
        self.items.clear();
        self.keys.clear();
        self.dirty = true;
    }

    /// Rebuilds the BVH from scratch, from the shapes currently registered.
    pub fn rebuild(&mut self) {
        self.bvh.rebuild(
            self.items
                .iter()
                .map(|(key, item)| (key as u32, item.aabb)),
        );
        self.dirty = false;

        #[cfg(debug_assertions)]
        self.bvh
            .assert_well_formed(|key| self.items[key as usize].aabb);

        log::debug!(
            "Rebuilt spatial index: {} items, {} nodes, depth {}.",
            self.items.len(),
            self.bvh.nodes().len(),
            self.bvh.depth()
        );
    }

    /// Has this index been modified since its last rebuild?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The number of shapes registered into this index.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Does this index contain no shape?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Is there a shape registered with the identifier `id`?
    pub fn contains(&self, id: u32) -> bool {
        self.keys.contains_key(&id)
    }

    /// The shape registered with the identifier `id`.
    pub fn shape(&self, id: u32) -> Option<&Shape> {
        self.keys.get(&id).map(|key| &self.items[*key].shape)
    }

    /// The AABB of the shape registered with the identifier `id`.
    pub fn aabb(&self, id: u32) -> Option<Aabb> {
        self.keys.get(&id).map(|key| self.items[*key].aabb)
    }

    /// Iterates through the identifiers and shapes of this index, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Shape)> {
        self.items.iter().map(|(_, item)| (item.id, &item.shape))
    }

    /// The AABB bounding every shape of the last rebuild.
    ///
    /// Returns `None` if the index was empty on its last rebuild.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.bvh.root_aabb()
    }

    /// The BVH computed by the last rebuild.
    ///
    /// Its leaf payloads are internal keys, not item identifiers.
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// The registered item with the internal key `key`.
    pub(crate) fn item(&self, key: u32) -> &ShapeItem {
        &self.items[key as usize]
    }

    /// Computes, in parallel, the sorted identifiers of the shapes intersecting each of the
    /// given shapes.
    ///
    /// # Panics
    /// Panics if the index is dirty.
    #[cfg(feature = "parallel")]
    pub fn par_intersections(&self, shapes: &[Shape]) -> Vec<Vec<u32>> {
        use crate::partitioning::SpatialQuery;
        use rayon::prelude::*;

        assert!(!self.dirty, "The spatial index must be rebuilt before being queried.");

        shapes
            .par_iter()
            .map(|shape| {
                let mut query = SpatialQuery::new(self);
                let _ = query.intersection(shape);
                query.into_result()
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::{SpatialIndex, SpatialIndexConfig, UpdateError};
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Real, Vector};
    use crate::pipeline::INVALID_ID;
    use crate::shape::{Ball, InvalidShape, Line, Shape};

    fn cube(min: Real, max: Real) -> Aabb {
        Aabb::new(Point::new(min, min, min), Point::new(max, max, max))
    }

    #[test]
    fn update_replaces_and_marks_dirty() {
        let mut index = SpatialIndex::new(SpatialIndexConfig { reserve: 4 });
        assert!(!index.is_dirty());

        index.update(1, cube(0.0, 1.0));
        index.update(1, cube(5.0, 6.0));
        assert!(index.is_dirty());
        assert_eq!(index.len(), 1);
        assert_eq!(index.aabb(1), Some(cube(5.0, 6.0)));

        index.rebuild();
        assert!(!index.is_dirty());
        assert_eq!(index.root_aabb(), Some(cube(5.0, 6.0)));
    }

    #[test]
    fn remove_and_clear() {
        let mut index = SpatialIndex::default();
        index.update(1, cube(0.0, 1.0));
        index.update_point(2, Point::new(3.0, 3.0, 3.0));
        index.rebuild();

        assert!(index.remove(7).is_none());
        assert!(index.is_dirty());
        assert_eq!(index.remove(1), Some(Shape::Aabb(cube(0.0, 1.0))));
        assert!(!index.contains(1));
        assert!(index.contains(2));

        index.clear();
        index.rebuild();
        assert!(index.is_empty());
        assert!(index.bvh().is_empty());
        assert_eq!(index.root_aabb(), None);
    }

    #[test]
    fn rejected_updates_leave_index_unchanged() {
        let mut index = SpatialIndex::default();
        assert_eq!(
            index.try_update(0, cube(0.0, 1.0)),
            Err(UpdateError::ReservedId(0))
        );
        assert_eq!(
            index.try_update(INVALID_ID, cube(0.0, 1.0)),
            Err(UpdateError::ReservedId(INVALID_ID))
        );
        assert_eq!(
            index.try_update(1, Line::ray(Point::origin(), Vector::x())),
            Err(UpdateError::InvalidShape(InvalidShape::Unbounded))
        );
        assert_eq!(
            index.try_update(1, Ball::new(Point::origin(), -1.0)),
            Err(UpdateError::InvalidShape(InvalidShape::NegativeRadius))
        );
        assert!(index.is_empty());
        assert!(!index.is_dirty());
    }

    #[test]
    #[should_panic]
    fn reserved_id_panics() {
        let mut index = SpatialIndex::default();
        index.update(0, cube(0.0, 1.0));
    }

    #[test]
    fn slab_keys_are_reused() {
        let mut index = SpatialIndex::default();
        for id in 1..=50 {
            index.update(id, cube(id as Real, id as Real + 0.5));
        }
        for id in (1..=50).step_by(2) {
            let _ = index.remove(id);
        }
        for id in 100..125 {
            index.update(id, cube(id as Real, id as Real + 0.5));
        }
        index.rebuild();

        assert_eq!(index.len(), 50);
        assert_eq!(index.bvh().leaf_item_count(), 50);
        let mut ids: Vec<_> = index.iter().map(|(id, _)| id).collect();
        ids.sort_unstable();
        let expected: Vec<_> = (2..=50).step_by(2).chain(100..125).collect();
        assert_eq!(ids, expected);
    }
}
