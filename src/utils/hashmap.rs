//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic hashmap using [`indexmap::IndexMap`].
#[cfg(feature = "enhanced-determinism")]
pub type HashMap<K, V> = indexmap::IndexMap<K, V>;
/// Deterministic hashset using [`indexmap::IndexSet`].
#[cfg(feature = "enhanced-determinism")]
pub type HashSet<K> = indexmap::IndexSet<K>;
#[cfg(feature = "enhanced-determinism")]
pub use indexmap::map::Entry;

/// Hashmap using [`hashbrown::HashMap`].
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;
/// Hashset using [`hashbrown::HashSet`].
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;
#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::hash_map::Entry;
