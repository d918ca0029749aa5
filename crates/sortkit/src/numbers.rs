//! Numeric sequence adapter.

use std::fmt;

use crate::{SortError, Sortable};

/// A contiguous sequence of integers, ordered by numeric value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumbersCollection {
    data: Vec<i64>,
}

impl NumbersCollection {
    /// Creates a collection that owns `data`.
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    /// Returns the stored values in their current order.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Consumes the collection, returning the stored values.
    pub fn into_inner(self) -> Vec<i64> {
        self.data
    }

    fn get(&self, index: usize) -> Result<i64, SortError> {
        self.data
            .get(index)
            .copied()
            .ok_or(SortError::IndexOutOfBound {
                index,
                len: self.data.len(),
            })
    }

    fn check(&self, index: usize) -> Result<(), SortError> {
        self.get(index).map(|_| ())
    }
}

impl Sortable for NumbersCollection {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, SortError> {
        Ok(self.get(left)? > self.get(right)?)
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), SortError> {
        self.check(left)?;
        self.check(right)?;
        self.data.swap(left, right);
        Ok(())
    }
}

impl From<Vec<i64>> for NumbersCollection {
    fn from(data: Vec<i64>) -> Self {
        Self::new(data)
    }
}

impl FromIterator<i64> for NumbersCollection {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for NumbersCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}
