use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, INTERSECTION_EPSILON};
use crate::partitioning::{SpatialIndex, TraversalAction};
use crate::query::{self, QueryError};
use crate::shape::Shape;
use crate::utils;

/// A reusable query finding the shapes of a [`SpatialIndex`] intersecting a given shape.
///
/// The query borrows the index immutably: the index can’t be modified while the query is alive,
/// and the index must not be dirty when the query is created.
///
/// # Example
/// ```
/// use spatial3d::math::Point;
/// use spatial3d::partitioning::{SpatialIndex, SpatialQuery};
/// use spatial3d::shape::Ball;
///
/// let mut index = SpatialIndex::default();
/// index.update(1, Ball::new(Point::new(0.0, 0.0, 0.0), 1.0));
/// index.update(2, Ball::new(Point::new(3.0, 0.0, 0.0), 1.0));
/// index.rebuild();
///
/// let mut query = SpatialQuery::new(&index);
/// assert!(query.intersection_point(Point::new(2.5, 0.0, 0.0)));
/// assert_eq!(query.result(), &[2]);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialQuery<'a> {
    index: &'a SpatialIndex,
    result: Vec<u32>,
}

impl<'a> SpatialQuery<'a> {
    /// Creates a query on the given index.
    ///
    /// # Panics
    /// Panics if the index is dirty. Use [`SpatialQuery::try_new`] for a fallible version.
    pub fn new(index: &'a SpatialIndex) -> Self {
        assert!(
            !index.is_dirty(),
            "The spatial index must be rebuilt before being queried."
        );
        Self {
            index,
            result: vec![],
        }
    }

    /// Creates a query on the given index, or fails if the index is dirty.
    pub fn try_new(index: &'a SpatialIndex) -> Result<Self, QueryError> {
        if index.is_dirty() {
            Err(QueryError::DirtyIndex)
        } else {
            Ok(Self::new(index))
        }
    }

    /// The index this query runs on.
    pub fn index(&self) -> &'a SpatialIndex {
        self.index
    }

    /// Finds every registered shape intersecting `shape`.
    ///
    /// Returns `true` if at least one was found. The identifiers of the shapes found are then
    /// available, sorted and without duplicates, through [`SpatialQuery::result`].
    pub fn intersection(&mut self, shape: &Shape) -> bool {
        self.result.clear();

        let bvh = self.index.bvh();
        let query_aabb = shape.aabb().loosened(INTERSECTION_EPSILON);
        // A box query is already fully tested by the node-vs-box test.
        let test_nodes_exactly = !matches!(shape, Shape::Aabb(_));

        bvh.traverse(|node| {
            if !node.intersects_aabb(&query_aabb)
                || (test_nodes_exactly
                    && !query::intersection_test(shape, &Shape::Aabb(node.aabb())))
            {
                return TraversalAction::Prune;
            }

            for key in bvh.leaf_payloads(node) {
                let item = self.index.item(*key);

                if item.aabb.intersects(&query_aabb) && item.shape.intersects(shape) {
                    self.result.push(item.id);
                }
            }

            TraversalAction::Continue
        });

        utils::sort_dedup(&mut self.result);
        !self.result.is_empty()
    }

    /// Finds every registered shape intersecting the box `aabb`.
    pub fn intersection_aabb(&mut self, aabb: Aabb) -> bool {
        self.intersection(&Shape::Aabb(aabb))
    }

    /// Finds every registered shape containing `point`.
    pub fn intersection_point(&mut self, point: Point<Real>) -> bool {
        self.intersection(&Shape::from(point))
    }

    /// The identifiers found by the last intersection, in ascending order.
    pub fn result(&self) -> &[u32] {
        &self.result
    }

    /// Consumes this query, returning the identifiers found by the last intersection.
    pub fn into_result(self) -> Vec<u32> {
        self.result
    }
}
