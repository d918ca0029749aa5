//! The compare/swap sort and the two ways of attaching it to a collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{SortError, Sortable};

/// Work performed by a single [`sort`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Calls made to [`Sortable::compare`].
    pub compares: u64,
    /// Calls made to [`Sortable::swap`].
    pub swaps: u64,
}

/// Sorts `collection` in place into ascending order.
///
/// For every position `i`, each later position `j` is compared against it
/// and swapped in immediately when `compare(i, j)` holds, so position `i`
/// may be re-filled several times per outer pass. This always performs
/// exactly `n * (n - 1) / 2` compares and at most as many swaps.
///
/// The routine sees nothing but the [`Sortable`] contract.
///
/// # Errors
///
/// Propagates the first error raised by the collection's `compare` or
/// `swap`.
pub fn sort<S: Sortable + ?Sized>(collection: &mut S) -> Result<SortStats, SortError> {
    let len = collection.len();
    let mut stats = SortStats::default();

    tracing::debug!(len, "sorting collection");

    for left in 0..len {
        for right in (left + 1)..len {
            stats.compares += 1;
            if collection.compare(left, right)? {
                tracing::trace!(left, right, "swap");
                collection.swap(left, right)?;
                stats.swaps += 1;
            }
        }
    }

    tracing::debug!(
        len,
        compares = stats.compares,
        swaps = stats.swaps,
        "sorted collection"
    );

    Ok(stats)
}

/// Standalone orchestrator that borrows a collection for sorting.
///
/// # Example
///
/// ```
/// use sortkit::{CharactersCollection, Sorter};
///
/// let mut text = CharactersCollection::new("AsDfGh");
/// let mut sorter = Sorter::new(&mut text);
/// sorter.sort().unwrap();
/// assert_eq!(sorter.collection().as_str(), "ADfGhs");
/// ```
#[derive(Debug)]
pub struct Sorter<'a, S: Sortable + ?Sized> {
    collection: &'a mut S,
}

impl<'a, S: Sortable + ?Sized> Sorter<'a, S> {
    /// Creates a sorter over `collection`.
    pub fn new(collection: &'a mut S) -> Self {
        Self { collection }
    }

    /// Sorts the borrowed collection in place.
    pub fn sort(&mut self) -> Result<SortStats, SortError> {
        sort(&mut *self.collection)
    }

    /// Returns the borrowed collection.
    pub fn collection(&self) -> &S {
        &*self.collection
    }

    /// Returns the borrowed collection mutably.
    pub fn collection_mut(&mut self) -> &mut S {
        &mut *self.collection
    }
}

/// How the sort is attached to a collection.
///
/// Both strategies run the same algorithm and leave the collection in the
/// same state; they differ only in call surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// A [`Sorter`] borrows the collection.
    #[default]
    Standalone,
    /// The collection sorts itself through [`Sortable::sort`].
    Inherited,
}

impl Strategy {
    /// All strategies, in a stable order.
    pub const ALL: [Strategy; 2] = [Strategy::Standalone, Strategy::Inherited];

    /// Sorts `collection` using this strategy.
    pub fn apply<S: Sortable + ?Sized>(self, collection: &mut S) -> Result<SortStats, SortError> {
        match self {
            Strategy::Standalone => Sorter::new(collection).sort(),
            Strategy::Inherited => collection.sort(),
        }
    }

    /// Short name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Standalone => "standalone",
            Strategy::Inherited => "inherited",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort strategy: {0} (expected standalone or inherited)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standalone" => Ok(Strategy::Standalone),
            "inherited" => Ok(Strategy::Inherited),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
