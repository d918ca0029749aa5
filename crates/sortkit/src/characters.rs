//! Character sequence adapter over an immutable `String`.
//!
//! The stored text is treated as a value: every swap splits it into a
//! `Vec<char>`, exchanges two positions and joins it back into a fresh
//! `String`. A swap therefore costs O(n) in the text length, which is the
//! price of keeping the text itself immutable between operations.

use std::fmt;

use crate::{SortError, Sortable};

/// A text value ordered character by character, ignoring case.
///
/// Positions are `char` positions, not byte offsets. Each character keeps
/// its original case wherever it lands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharactersCollection {
    data: String,
}

impl CharactersCollection {
    /// Creates a collection that owns `data`.
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the current text.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Consumes the collection, returning the text.
    pub fn into_inner(self) -> String {
        self.data
    }

    fn char_at(&self, index: usize) -> Result<char, SortError> {
        self.data
            .chars()
            .nth(index)
            .ok_or_else(|| SortError::IndexOutOfBound {
                index,
                len: self.len(),
            })
    }
}

impl Sortable for CharactersCollection {
    fn len(&self) -> usize {
        self.data.chars().count()
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, SortError> {
        let left = self.char_at(left)?;
        let right = self.char_at(right)?;
        Ok(left.to_lowercase().gt(right.to_lowercase()))
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), SortError> {
        let mut characters: Vec<char> = self.data.chars().collect();
        let len = characters.len();
        for index in [left, right] {
            if index >= len {
                return Err(SortError::IndexOutOfBound { index, len });
            }
        }

        characters.swap(left, right);
        self.data = characters.into_iter().collect();
        Ok(())
    }
}

impl From<&str> for CharactersCollection {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<String> for CharactersCollection {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for CharactersCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
