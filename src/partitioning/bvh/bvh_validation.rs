use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::Bvh;
use crate::utils::hashmap::HashSet;

impl Bvh {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (child indices are valid, every
    /// node is reached exactly once, every leaf item is referenced by exactly one leaf) and
    /// geometrically tight: the AABB of an internal node is exactly the union of its children's
    /// AABBs, and the AABB of a leaf is exactly the union of the AABBs of its items, as given by
    /// `item_aabb`.
    pub fn assert_well_formed(&self, item_aabb: impl Fn(u32) -> Aabb) {
        if self.is_empty() {
            assert!(self.leaf_items.is_empty());
            return;
        }

        let mut loop_detection = HashSet::default();
        let referenced = self.assert_well_formed_recurse(0, &item_aabb, &mut loop_detection);
        assert_eq!(referenced, self.leaf_items.len());
        assert_eq!(loop_detection.len(), self.nodes.len());
    }

    fn assert_well_formed_recurse(
        &self,
        node_id: u32,
        item_aabb: &impl Fn(u32) -> Aabb,
        loop_detection: &mut HashSet<u32>,
    ) -> usize {
        if !loop_detection.insert(node_id) {
            panic!("Detected loop. Node {} visited twice.", node_id);
        }

        let node = &self.nodes[node_id as usize];
        let (a, b) = node.raw();
        assert_eq!(
            a < 0,
            b < 0,
            "Node {} mixes internal and leaf encodings.",
            node_id
        );

        match node.children() {
            Some([left, right]) => {
                assert!((left as usize) < self.nodes.len());
                assert!((right as usize) < self.nodes.len());
                let left_count = self.assert_well_formed_recurse(left, item_aabb, loop_detection);
                let right_count =
                    self.assert_well_formed_recurse(right, item_aabb, loop_detection);
                let expected = self.nodes[left as usize]
                    .aabb()
                    .merged(&self.nodes[right as usize].aabb());
                assert_eq!(node.aabb(), expected, "Node {} is not tight.", node_id);
                left_count + right_count
            }
            None => {
                let range = node.leaf_range().unwrap_or_default();
                assert!(!range.is_empty(), "Leaf {} is empty.", node_id);
                assert!(range.end <= self.leaf_items.len());
                let expected = self.leaf_items[range.clone()]
                    .iter()
                    .fold(Aabb::new_invalid(), |acc, item| acc.merged(&item_aabb(*item)));
                assert_eq!(node.aabb(), expected, "Leaf {} is not tight.", node_id);
                range.len()
            }
        }
    }

    /// Panics if the nodes of `self` are not stored in depth-first order on its internal storage.
    ///
    /// Depth-first ordering is guaranteed by the build: the left subtree of every node is fully
    /// built before its right child is pushed.
    pub fn assert_is_depth_first(&self) {
        if self.is_empty() {
            return;
        }

        let mut stack = vec![0u32];
        let mut loop_id = 0;
        while let Some(id) = stack.pop() {
            assert_eq!(loop_id, id);
            loop_id += 1;

            if let Some([left, right]) = self.nodes[id as usize].children() {
                stack.push(right);
                stack.push(left);
            }
        }
    }
}
