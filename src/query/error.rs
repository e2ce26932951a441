/// Error returned when a query can’t be constructed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The index was modified since it was last rebuilt.
    ///
    /// Call `rebuild()` on the index (or the registry) before querying it.
    #[error("the index has been modified since its last rebuild.")]
    DirtyIndex,
}
