use super::bvh_tree::{BuildHelper, LEAF_SIZE_THRESHOLD, NUM_BINS};
use super::{Bvh, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, DIM};
use ordered_float::OrderedFloat;

#[derive(Copy, Clone, Debug)]
struct BestSplit {
    axis: usize,
    mid: usize,
    cost: Real,
}

impl Bvh {
    /// Builds the subtree covering `helpers`, whose first item lands at `offset` in the final
    /// leaf-item array.
    ///
    /// A new node is pushed for the range. Its children (if any) are pushed afterward, with the
    /// left subtree fully built before the right node is pushed. Returns the index of the node.
    pub(super) fn rebuild_range_binned(
        &mut self,
        helpers: &mut [BuildHelper],
        offset: usize,
        parent_cost: Real,
    ) -> usize {
        let node_id = self.nodes.len();
        let aabb = BuildHelper::merged_aabb(helpers);
        self.nodes.push(BvhNode::leaf(aabb, offset, helpers.len()));

        if helpers.len() < LEAF_SIZE_THRESHOLD {
            return node_id;
        }

        let Some(best) = Self::find_best_split(helpers) else {
            return node_id;
        };

        if best.cost >= parent_cost {
            // Splitting would not make anything better.
            return node_id;
        }

        if best.axis != DIM - 1 {
            // The helpers are still sorted along the last axis evaluated.
            sort_by_center(helpers, best.axis);
        }

        let (left, right) = helpers.split_at_mut(best.mid);
        let left_id = self.rebuild_range_binned(left, offset, best.cost);
        let right_id = self.rebuild_range_binned(right, offset + best.mid, best.cost);

        let merged = self.nodes[left_id]
            .aabb()
            .merged(&self.nodes[right_id].aabb());
        self.nodes[node_id].set_children(merged, left_id, right_id);
        node_id
    }

    /// Evaluates the surface-area heuristic at every bin boundary of every axis.
    ///
    /// Returns `None` only if no cost could be computed (non-finite boxes).
    fn find_best_split(helpers: &mut [BuildHelper]) -> Option<BestSplit> {
        let len = helpers.len();
        let mut best: Option<BestSplit> = None;
        let mut right_merges = vec![Aabb::new_invalid(); len];

        for axis in 0..DIM {
            sort_by_center(helpers, axis);

            // right_merges[i] bounds helpers[i..].
            let mut acc = Aabb::new_invalid();
            for i in (0..len).rev() {
                acc.merge(&helpers[i].aabb);
                right_merges[i] = acc;
            }

            let mut left_merge = Aabb::new_invalid();
            let mut merged_up_to = 0;

            for bin in 1..NUM_BINS {
                let mid = len * bin / NUM_BINS;

                for helper in &helpers[merged_up_to..mid] {
                    left_merge.merge(&helper.aabb);
                }
                merged_up_to = mid;

                let cost = left_merge.surface_area() * mid as Real
                    + right_merges[mid].surface_area() * (len - mid) as Real;

                if cost.is_nan() {
                    continue;
                }

                if best.map(|b| cost < b.cost).unwrap_or(true) {
                    best = Some(BestSplit { axis, mid, cost });
                }
            }
        }

        best
    }
}

fn sort_by_center(helpers: &mut [BuildHelper], axis: usize) {
    helpers.sort_by_key(|h| OrderedFloat(h.center[axis]));
}
