pub use bvh_traverse::{Leaves, TraversalAction};
pub use bvh_traverse_bvtt::LeafPairs;
pub use bvh_tree::{Bvh, BvhNode, LEAF_SIZE_THRESHOLD, NUM_BINS};

mod bvh_binned_build;
mod bvh_traverse;
mod bvh_traverse_bvtt;
mod bvh_tree;
mod bvh_validation;

#[cfg(test)]
mod bvh_tests;
