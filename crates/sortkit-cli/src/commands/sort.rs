//! Single-collection sort commands.

use anyhow::Result;
use sortkit::{CharactersCollection, LinkedList, NumbersCollection};

use super::{RunSettings, finish, sort_each};

/// Sorts integers held in a vector.
pub fn numbers(settings: &RunSettings, values: Vec<i64>) -> Result<()> {
    let reports = sort_each(settings, &NumbersCollection::new(values))?;
    finish(settings, &reports)
}

/// Sorts the characters of `text`, ignoring case.
pub fn chars(settings: &RunSettings, text: String) -> Result<()> {
    let reports = sort_each(settings, &CharactersCollection::new(text))?;
    finish(settings, &reports)
}

/// Sorts integers appended one by one to a linked list.
pub fn list(settings: &RunSettings, values: Vec<i64>) -> Result<()> {
    let reports = sort_each(settings, &values.into_iter().collect::<LinkedList>())?;
    finish(settings, &reports)
}
