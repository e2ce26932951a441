//! Registry of transformed colliders and the collision queries running on it.

pub use self::collision_query::{CollisionHit, CollisionQuery, INVALID_ID};
pub use self::collision_registry::{CollisionRegistry, CollisionRegistryConfig, RigidItem};

mod collision_query;
mod collision_registry;

static_assertions::assert_impl_all!(CollisionRegistry: Send, Sync);
static_assertions::assert_impl_all!(CollisionQuery<'static>: Send, Sync);
static_assertions::assert_impl_all!(crate::partitioning::SpatialIndex: Send, Sync);
static_assertions::assert_impl_all!(crate::partitioning::SpatialQuery<'static>: Send, Sync);
