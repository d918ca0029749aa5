//! Singly linked list adapter.
//!
//! Positional access walks from the head on every call: `at` is O(n), so a
//! full sort over a list costs O(n³). Nothing caches node positions.

use std::fmt;

use crate::{SortError, Sortable};

/// A list node holding one value.
///
/// No recursive trait impls: `Debug` shows the value and the next value only.
pub struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(value: i64) -> Self {
        Self { value, next: None }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The following node, or `None` for the tail.
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }
}

/// A singly linked list of integers.
///
/// Nodes are only ever appended. Sorting exchanges the values held by two
/// nodes and never relinks them.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` all walk the chain in a loop, so
/// list length is not bounded by stack depth.
#[derive(Default)]
pub struct LinkedList {
    head: Option<Box<Node>>,
}

impl LinkedList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` as the new tail.
    pub fn add(&mut self, value: i64) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Returns the node at zero-based `index`.
    ///
    /// # Errors
    ///
    /// [`SortError::IndexOutOfBound`] if the walk runs past the tail,
    /// including every index on an empty list.
    pub fn at(&self, index: usize) -> Result<&Node, SortError> {
        let mut current = self.head.as_deref();
        let mut position = 0;
        while let Some(node) = current {
            if position == index {
                return Ok(node);
            }
            current = node.next.as_deref();
            position += 1;
        }

        tracing::debug!(index, len = position, "linked list index out of bound");
        Err(SortError::IndexOutOfBound {
            index,
            len: position,
        })
    }

    /// Mutable counterpart of [`LinkedList::at`]; bounds are checked by `at`.
    fn at_mut(&mut self, index: usize) -> Result<&mut Node, SortError> {
        self.at(index)?;

        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.ok_or(SortError::IndexOutOfBound { index, len: index })
    }

    /// Iterates over the stored values from head to tail.
    pub fn iter(&self) -> Values<'_> {
        Values {
            next: self.head.as_deref(),
        }
    }

    /// Returns the stored values from head to tail.
    pub fn values(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Writes the list to stdout as `[v0, v1, ...]`.
    ///
    /// An empty list prints `[]` rather than nothing, so before/after output
    /// always has a line for each state.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Sortable for LinkedList {
    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, SortError> {
        if self.head.is_none() {
            return Err(SortError::EmptyCollection);
        }
        Ok(self.at(left)?.value > self.at(right)?.value)
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), SortError> {
        if self.head.is_none() {
            return Err(SortError::EmptyCollection);
        }

        let left_value = self.at(left)?.value;
        let right_value = self.at(right)?.value;
        self.at_mut(left)?.value = right_value;
        self.at_mut(right)?.value = left_value;
        Ok(())
    }
}

// Unlink iteratively so long lists don't overflow the stack on drop.
impl Drop for LinkedList {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("values", &DebugValues(self))
            .finish()
    }
}

struct DebugValues<'a>(&'a LinkedList);

impl fmt::Debug for DebugValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("next", &self.next().map(Node::value))
            .finish()
    }
}

impl FromIterator<i64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut cursor = &mut list.head;
        for value in iter {
            let node = cursor.insert(Box::new(Node::new(value)));
            cursor = &mut node.next;
        }
        list
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`LinkedList`].
#[derive(Debug)]
pub struct Values<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Values<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i64;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
