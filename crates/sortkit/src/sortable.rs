//! Sortable capability trait.
//!
//! The [`Sortable`] trait abstracts positional access to an ordered
//! collection so that a single algorithm can sort:
//! - Contiguous numeric storage
//! - Immutable text reinterpreted as a character sequence
//! - Linked nodes reachable only by traversal from the head
//!
//! The algorithm never sees element values. It asks the collection whether
//! two positions are out of order and tells it to exchange them.

use crate::{SortError, SortStats};

/// Abstraction over a collection that can be reordered by position.
///
/// Implementations must keep [`len`](Self::len) constant across
/// [`compare`](Self::compare) and [`swap`](Self::swap) for every valid pair
/// of positions in `[0, len)`.
pub trait Sortable {
    /// Number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `left` must be ordered after the
    /// element at `right` in ascending order.
    fn compare(&self, left: usize, right: usize) -> Result<bool, SortError>;

    /// Exchanges the elements at `left` and `right`.
    ///
    /// A no-op when `left == right`.
    fn swap(&mut self, left: usize, right: usize) -> Result<(), SortError>;

    /// Sorts the collection in place.
    ///
    /// Provided in terms of `len`/`compare`/`swap` only, so every
    /// implementor inherits the same algorithm as [`crate::sort`].
    fn sort(&mut self) -> Result<SortStats, SortError> {
        crate::sort(self)
    }
}
