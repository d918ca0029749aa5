//! Sort error types.

/// Errors raised by a [`Sortable`](crate::Sortable) collection.
///
/// Both variants are precondition violations: the sort algorithm only ever
/// addresses positions below the collection's own reported length, so they
/// surface when a caller drives an adapter directly with a bad index or
/// hands an empty linked list to `compare`/`swap`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Position outside `[0, len)`.
    #[error("index {index} out of bound (length {len})")]
    IndexOutOfBound { index: usize, len: usize },

    /// Positional access on a collection with no elements.
    #[error("collection is empty")]
    EmptyCollection,
}
