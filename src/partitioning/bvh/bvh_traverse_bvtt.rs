use super::bvh_traverse::TRAVERSAL_STACK_SIZE;
use super::{Bvh, BvhNode};
use smallvec::SmallVec;

impl Bvh {
    /// Performs a simultaneous traversal of the BVHs `self` and `other`, and yields the pairs
    /// of leaf items it reached.
    ///
    /// Any node pairs failing the given `check` will be excluded from the traversal. Every item
    /// of a leaf of `self` is paired with every item of a leaf of `other` once both leaves are
    /// reached, so the caller must refine the pairs with its own per-item test.
    pub fn leaf_pairs<'a, F: Fn(&BvhNode, &BvhNode) -> bool>(
        &'a self,
        other: &'a Self,
        check: F,
    ) -> LeafPairs<'a, F> {
        let mut stack = SmallVec::default();

        if let (Some(root1), Some(root2)) = (self.nodes.first(), other.nodes.first()) {
            if check(root1, root2) {
                stack.push((root1, root2));
            }
        }

        LeafPairs {
            tree1: self,
            tree2: other,
            pending: None,
            stack,
            check,
        }
    }
}

/// Iterator over the pairs of leaf items reached by a simultaneous traversal of two trees.
///
/// Built by [`Bvh::leaf_pairs`].
pub struct LeafPairs<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> {
    tree1: &'a Bvh,
    tree2: &'a Bvh,
    // The items of two leaves, and the index of the next pair of their cartesian product.
    pending: Option<(&'a [u32], &'a [u32], usize)>,
    stack: SmallVec<[(&'a BvhNode, &'a BvhNode); TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<Check: Fn(&BvhNode, &BvhNode) -> bool> Iterator for LeafPairs<'_, Check> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((items1, items2, k)) = self.pending {
                if k < items1.len() * items2.len() {
                    self.pending = Some((items1, items2, k + 1));
                    return Some((items1[k / items2.len()], items2[k % items2.len()]));
                }

                self.pending = None;
            }

            let (node1, node2) = self.stack.pop()?;

            match (node1.children(), node2.children()) {
                (None, None) => {
                    self.pending = Some((
                        self.tree1.leaf_payloads(node1),
                        self.tree2.leaf_payloads(node2),
                        0,
                    ));
                }
                (None, Some(children2)) => {
                    for child2 in children2.into_iter().rev() {
                        let child2 = &self.tree2.nodes[child2 as usize];
                        if (self.check)(node1, child2) {
                            self.stack.push((node1, child2));
                        }
                    }
                }
                (Some(children1), None) => {
                    for child1 in children1.into_iter().rev() {
                        let child1 = &self.tree1.nodes[child1 as usize];
                        if (self.check)(child1, node2) {
                            self.stack.push((child1, node2));
                        }
                    }
                }
                (Some(children1), Some(children2)) => {
                    for child1 in children1.into_iter().rev() {
                        let child1 = &self.tree1.nodes[child1 as usize];
                        for child2 in children2.into_iter().rev() {
                            let child2 = &self.tree2.nodes[child2 as usize];
                            if (self.check)(child1, child2) {
                                self.stack.push((child1, child2));
                            }
                        }
                    }
                }
            }
        }
    }
}
