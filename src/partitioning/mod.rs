//! Spatial partitioning tools.

pub use self::bvh::{
    Bvh, BvhNode, LeafPairs, Leaves, TraversalAction, LEAF_SIZE_THRESHOLD, NUM_BINS,
};
pub use self::spatial_index::{SpatialIndex, SpatialIndexConfig, UpdateError};
pub use self::spatial_query::SpatialQuery;

mod bvh;
mod spatial_index;
mod spatial_query;
