use super::BvhNode;
use crate::bounding_volume::Aabb;
use crate::partitioning::Bvh;
use smallvec::SmallVec;

pub(super) const TRAVERSAL_STACK_SIZE: usize = 32;

/// Iterator over the payloads of the leaves reached by a depth-first traversal of a [`Bvh`].
///
/// Built by [`Bvh::leaves`].
pub struct Leaves<'a, Check: Fn(&BvhNode) -> bool> {
    tree: &'a Bvh,
    items: core::slice::Iter<'a, u32>,
    stack: SmallVec<[&'a BvhNode; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode) -> bool> Leaves<'a, Check> {
    fn new(tree: &'a Bvh, check: Check) -> Leaves<'a, Check> {
        let mut stack = SmallVec::default();

        if let Some(root) = tree.nodes.first() {
            if check(root) {
                stack.push(root);
            }
        }

        Leaves {
            tree,
            items: [].iter(),
            stack,
            check,
        }
    }
}

impl<Check: Fn(&BvhNode) -> bool> Iterator for Leaves<'_, Check> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(*item);
            }

            let node = self.stack.pop()?;

            match node.children() {
                Some([left, right]) => {
                    let left = &self.tree.nodes[left as usize];
                    let right = &self.tree.nodes[right as usize];

                    // Right first so the left subtree is popped first.
                    if (self.check)(right) {
                        self.stack.push(right);
                    }
                    if (self.check)(left) {
                        self.stack.push(left);
                    }
                }
                None => self.items = self.tree.leaf_payloads(node).iter(),
            }
        }
    }
}

/// Controls the main search loop of [`Bvh::traverse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalAction {
    /// Traverse the children of the current node.
    Continue,
    /// Don’t traverse the children of the current node.
    Prune,
    /// Exit the whole traversal.
    EarlyExit,
}

impl Bvh {
    /// Iterates through the payloads of every leaf whose AABB, and the AABBs of all its
    /// ancestors, pass the `check_node` predicate.
    ///
    /// Leaves are visited in depth-first order, left subtree first.
    pub fn leaves<F: Fn(&BvhNode) -> bool>(&self, check_node: F) -> Leaves<'_, F> {
        Leaves::new(self, check_node)
    }

    /// Iterates through the payloads of every leaf whose AABB intersects `aabb`.
    ///
    /// The items themselves are not tested against `aabb`: the caller is expected to refine
    /// the result with its own per-item test.
    pub fn leaves_intersecting_aabb(&self, aabb: Aabb) -> Leaves<'_, impl Fn(&BvhNode) -> bool> {
        self.leaves(move |node: &BvhNode| node.intersects_aabb(&aabb))
    }

    #[inline(always)]
    pub(crate) fn traversal_stack() -> SmallVec<[u32; TRAVERSAL_STACK_SIZE]> {
        Default::default()
    }

    /// Performs a depth-first traversal of this tree.
    ///
    /// The closure is called on each node reached. Returning [`TraversalAction::Continue`] from
    /// an internal node pushes its children; for a leaf the returned action only matters if it
    /// is [`TraversalAction::EarlyExit`]. Use [`Bvh::leaf_payloads`] to read the items of a
    /// leaf.
    pub fn traverse(&self, mut check_node: impl FnMut(&BvhNode) -> TraversalAction) {
        if self.nodes.is_empty() {
            return;
        }

        let mut stack = Self::traversal_stack();
        stack.push(0);

        while let Some(curr_id) = stack.pop() {
            let node = &self.nodes[curr_id as usize];

            match check_node(node) {
                TraversalAction::Continue => {
                    if let Some([left, right]) = node.children() {
                        stack.push(right);
                        stack.push(left);
                    }
                }
                TraversalAction::Prune => {}
                TraversalAction::EarlyExit => return,
            }
        }
    }
}
