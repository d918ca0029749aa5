//! Demo command: sort the configured sample collections.

use anyhow::Result;
use sortkit::{CharactersCollection, LinkedList, NumbersCollection};

use super::{RunSettings, finish, sort_each};

/// Sorts the configured numbers, characters and linked list in turn.
pub fn run(settings: &RunSettings) -> Result<()> {
    let demo = &settings.config.demo;
    tracing::debug!(
        strategies = settings.strategies.len(),
        "running demo collections"
    );

    let numbers = NumbersCollection::new(demo.numbers.clone());
    let characters = CharactersCollection::new(demo.characters.as_str());
    let mut linked_list = LinkedList::new();
    for &value in &demo.linked_list {
        linked_list.add(value);
    }

    let mut reports = sort_each(settings, &numbers)?;
    reports.extend(sort_each(settings, &characters)?);
    reports.extend(sort_each(settings, &linked_list)?);

    finish(settings, &reports)
}
