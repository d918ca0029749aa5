//! # sortkit: Positional Sorting over Heterogeneous Collections
//!
//! This crate provides a trait-based abstraction over ordered collections,
//! letting one sort routine drive structurally different backing stores:
//!
//! - **[`NumbersCollection`]**: a `Vec<i64>` with direct element exchange
//! - **[`CharactersCollection`]**: an immutable `String` rebuilt on every swap
//! - **[`LinkedList`]**: a singly linked list addressed by repeated traversal
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │      sort() / Sorter / Sortable::sort    │
//! │       (uses len / compare / swap)        │
//! └───────────────────┬──────────────────────┘
//!                     │
//! ┌───────────────────┴──────────────────────┐
//! │              Sortable trait              │
//! │  ┌─────────┐  ┌────────────┐  ┌────────┐ │
//! │  │ Numbers │  │ Characters │  │ Linked │ │
//! │  │  (Vec)  │  │  (String)  │  │  List  │ │
//! │  └─────────┘  └────────────┘  └────────┘ │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use sortkit::{LinkedList, NumbersCollection, Sortable, Sorter};
//!
//! // Composition: a sorter borrows the collection.
//! let mut numbers = NumbersCollection::new(vec![10, 3, -5, 0]);
//! Sorter::new(&mut numbers).sort().unwrap();
//! assert_eq!(numbers.as_slice(), &[-5, 0, 3, 10]);
//!
//! // Provided method: the collection sorts itself.
//! let mut list: LinkedList = [10, 3, -5, 0].into_iter().collect();
//! list.sort().unwrap();
//! assert_eq!(list.to_string(), "[-5, 0, 3, 10]");
//! ```

mod algorithm;
mod characters;
mod error;
mod linked_list;
mod numbers;
mod sortable;

pub use algorithm::{ParseStrategyError, SortStats, Sorter, Strategy, sort};
pub use characters::CharactersCollection;
pub use error::SortError;
pub use linked_list::{LinkedList, Node, Values};
pub use numbers::NumbersCollection;
pub use sortable::Sortable;
