//! CLI command implementations.

pub mod config;
pub mod demo;
pub mod sort;
pub mod version;

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;
use sortkit::{CharactersCollection, LinkedList, NumbersCollection, Sortable, Strategy};
use sortkit_config::{OutputFormat, SortkitConfig};

use crate::style::{self, SemanticStyle};

/// Configuration merged with command-line overrides.
pub struct RunSettings {
    pub config: SortkitConfig,
    pub strategies: Vec<Strategy>,
    pub format: OutputFormat,
    pub stats: bool,
}

/// Commands that sort something.
pub enum SortCommand {
    Demo,
    Numbers(Vec<i64>),
    Chars(String),
    List(Vec<i64>),
}

pub fn run(settings: &RunSettings, command: SortCommand) -> Result<()> {
    match command {
        SortCommand::Demo => demo::run(settings),
        SortCommand::Numbers(values) => sort::numbers(settings, values),
        SortCommand::Chars(text) => sort::chars(settings, text),
        SortCommand::List(values) => sort::list(settings, values),
    }
}

/// Outcome of sorting one collection with one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub collection: &'static str,
    pub strategy: Strategy,
    pub len: usize,
    pub before: String,
    pub after: String,
    pub compares: u64,
    pub swaps: u64,
}

/// A collection the CLI knows how to label and print.
pub trait Showcase: Sortable + Display + Clone {
    /// Label used in headers and reports.
    const NAME: &'static str;

    /// Writes the collection to stdout.
    fn show(&self) {
        println!("{self}");
    }
}

impl Showcase for NumbersCollection {
    const NAME: &'static str = "numbers";
}

impl Showcase for CharactersCollection {
    const NAME: &'static str = "characters";
}

impl Showcase for LinkedList {
    const NAME: &'static str = "linked list";

    fn show(&self) {
        self.print();
    }
}

/// Sorts a fresh copy of `input` with every requested strategy.
///
/// In text mode the collection is printed before and after each pass.
pub fn sort_each<S: Showcase>(settings: &RunSettings, input: &S) -> Result<Vec<SortReport>> {
    settings.config.check_len(S::NAME, input.len())?;

    let mut reports = Vec::with_capacity(settings.strategies.len());
    for &strategy in &settings.strategies {
        let mut collection = input.clone();
        let text = settings.format == OutputFormat::Text;

        if text {
            println!(
                "{} {}",
                format!("{} collection:", capitalize(S::NAME)).header(),
                format!("({strategy})").muted()
            );
            collection.show();
        }

        let before = collection.to_string();
        let stats = strategy
            .apply(&mut collection)
            .with_context(|| format!("Failed to sort {} collection", S::NAME))?;

        if text {
            println!("{}", format!("{} collection sorted:", capitalize(S::NAME)).header());
            collection.show();
            style::print_spacer();
        }

        reports.push(SortReport {
            collection: S::NAME,
            strategy,
            len: collection.len(),
            before,
            after: collection.to_string(),
            compares: stats.compares,
            swaps: stats.swaps,
        });
    }

    Ok(reports)
}

/// Prints the trailer for a finished run: JSON document or stats table.
pub fn finish(settings: &RunSettings, reports: &[SortReport]) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(reports)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            if settings.stats {
                style::print_stats_table(reports);
            }
        }
    }
    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
