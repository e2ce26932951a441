use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use core::ops::Range;

/// Leaves containing fewer items than this are never split.
pub const LEAF_SIZE_THRESHOLD: usize = 10;

/// The number of equal-count bins evaluated per axis by the surface-area heuristic.
pub const NUM_BINS: usize = 10;

/// The node (internal or leaf) of a BVH.
///
/// The kind of the node is encoded in the sign of its two integers:
/// - both negative: internal node, `-a` and `-b` are the indices of the left and right children
///   in [`Bvh::nodes`];
/// - both non-negative: leaf node, `a` is an offset and `b` a count into [`Bvh::leaf_items`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct BvhNode {
    /// Mins coordinates of the node’s bounding volume.
    pub(super) mins: Point<Real>,
    /// Left child (negated) or leaf offset.
    pub(super) a: i32,
    /// Maxs coordinates of this node’s bounding volume.
    pub(super) maxs: Point<Real>,
    /// Right child (negated) or leaf item count.
    pub(super) b: i32,
}

impl BvhNode {
    /// Initializes a leaf referencing `count` items starting at `offset`.
    #[inline]
    pub(super) fn leaf(aabb: Aabb, offset: usize, count: usize) -> Self {
        Self {
            mins: aabb.mins,
            a: offset as i32,
            maxs: aabb.maxs,
            b: count as i32,
        }
    }

    /// Turns this node into an internal node with the given children.
    #[inline]
    pub(super) fn set_children(&mut self, aabb: Aabb, left: usize, right: usize) {
        debug_assert!(left > 0 && right > 0, "The root cannot be a child.");
        self.mins = aabb.mins;
        self.maxs = aabb.maxs;
        self.a = -(left as i32);
        self.b = -(right as i32);
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.a >= 0
    }

    /// The raw `(a, b)` pair of this node.
    #[inline]
    pub fn raw(&self) -> (i32, i32) {
        (self.a, self.b)
    }

    /// The indices of the left and right children, if this node is internal.
    #[inline]
    pub fn children(&self) -> Option<[u32; 2]> {
        (!self.is_leaf()).then(|| [(-self.a) as u32, (-self.b) as u32])
    }

    /// The range of [`Bvh::leaf_items`] referenced by this node, if it is a leaf.
    #[inline]
    pub fn leaf_range(&self) -> Option<Range<usize>> {
        self.is_leaf()
            .then(|| self.a as usize..self.a as usize + self.b as usize)
    }

    /// The min corner of this node’s AABB.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.mins
    }

    /// The max corner of this node’s AABB.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.maxs
    }

    /// This node’s AABB.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            mins: self.mins,
            maxs: self.maxs,
        }
    }

    /// The center of this node’s AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Checks if the AABB of `self` intersects the `other` AABB.
    #[inline]
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }
}

/// A Bounding Volume Hierarchy built top-down with a binned surface-area heuristic.
///
/// The tree is immutable once built: it is discarded and rebuilt from scratch whenever its
/// content changes. Every leaf references a contiguous range of [`Bvh::leaf_items`], which
/// stores the `u32` payload given for each AABB at construction time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNode>,
    pub(super) leaf_items: Vec<u32>,
}

impl Bvh {
    /// An empty BVH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new BVH with a slice of AABBs.
    ///
    /// Each item will be associated an index equal to its position into the slice. For example,
    /// the AABB `leaves[42]` is associated to the item with index 42.
    pub fn from_leaves(leaves: &[Aabb]) -> Self {
        Self::from_iter(
            leaves
                .iter()
                .enumerate()
                .map(|(i, aabb)| (i as u32, *aabb)),
        )
    }

    /// Creates a new BVH with items given by an iterator.
    ///
    /// The iterator yields the payload and AABB of each item. The payloads will then be read back
    /// from [`Bvh::leaf_items`] by tree traversals.
    pub fn from_iter<It>(leaves: It) -> Self
    where
        It: IntoIterator<Item = (u32, Aabb)>,
    {
        let mut result = Self::new();
        result.rebuild(leaves);
        result
    }

    /// Discards the whole tree and builds a new one from the given items.
    pub fn rebuild<It>(&mut self, leaves: It)
    where
        It: IntoIterator<Item = (u32, Aabb)>,
    {
        self.nodes.clear();
        self.leaf_items.clear();

        let mut helpers: Vec<_> = leaves
            .into_iter()
            .map(|(payload, aabb)| BuildHelper::new(payload, aabb))
            .collect();

        if helpers.is_empty() {
            return;
        }

        self.nodes.reserve(helpers.len() / 2);
        self.leaf_items.reserve(helpers.len());
        let _ = self.rebuild_range_binned(&mut helpers, 0, Real::INFINITY);
        self.leaf_items.extend(helpers.iter().map(|h| h.payload));
    }

    /// The AABB bounding everything contained by this BVH.
    ///
    /// Returns `None` if the tree is empty.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.nodes.first().map(|root| root.aabb())
    }

    /// Does this tree not contain any item?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of items referenced by the leaves of this tree.
    pub fn leaf_item_count(&self) -> usize {
        self.leaf_items.len()
    }

    /// All the nodes of this tree. The root, if any, is at index 0.
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// The flat array of item payloads, referenced by range from the leaves.
    pub fn leaf_items(&self) -> &[u32] {
        &self.leaf_items
    }

    /// The payloads of the items referenced by the given leaf node.
    ///
    /// Returns an empty slice if `node` is not a leaf.
    pub fn leaf_payloads(&self, node: &BvhNode) -> &[u32] {
        node.leaf_range()
            .map(|range| &self.leaf_items[range])
            .unwrap_or(&[])
    }

    /// The depth of the sub-tree rooted at the node with index `node_id`.
    ///
    /// Set `node_id` to 0 to get the depth of the whole tree. A tree made of a single leaf
    /// has a depth of 1.
    pub fn subtree_depth(&self, node_id: u32) -> u32 {
        let Some(node) = self.nodes.get(node_id as usize) else {
            return 0;
        };

        match node.children() {
            None => 1,
            Some([left, right]) => self.subtree_depth(left).max(self.subtree_depth(right)) + 1,
        }
    }

    /// The depth of the whole tree.
    pub fn depth(&self) -> u32 {
        self.subtree_depth(0)
    }
}

#[derive(Copy, Clone, Debug)]
pub(super) struct BuildHelper {
    pub payload: u32,
    pub aabb: Aabb,
    pub center: Point<Real>,
}

impl BuildHelper {
    fn new(payload: u32, aabb: Aabb) -> Self {
        Self {
            payload,
            aabb,
            center: aabb.center(),
        }
    }

    pub fn merged_aabb(helpers: &[Self]) -> Aabb {
        helpers
            .iter()
            .fold(Aabb::new_invalid(), |acc, h| acc.merged(&h.aabb))
    }
}
