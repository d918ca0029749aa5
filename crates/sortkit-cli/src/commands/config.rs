//! Configuration management commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use sortkit_config::{Paths, SortkitConfig};
use std::path::Path;

use crate::style::{self, SemanticStyle};

/// Rendering for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Text,
    Json,
    Toml,
}

/// Show current configuration.
pub fn show(project: &str, format: ShowFormat) -> Result<()> {
    let project_path = Path::new(project);

    let config =
        SortkitConfig::load_from_dir(project_path).context("Failed to load configuration")?;

    match format {
        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ShowFormat::Toml => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        ShowFormat::Text => {
            println!("{}", "sortkit Configuration".header());
            println!("=====================\n");

            println!("Project:");
            style::print_labeled("Name", &config.project.name);
            println!();

            println!("Sort:");
            style::print_labeled("Strategy", config.sort.strategy.as_str());
            style::print_labeled("Max length", &config.sort.max_len.to_string());
            println!();

            println!("Demo:");
            style::print_labeled("Numbers", &format!("{:?}", config.demo.numbers));
            style::print_labeled("Characters", &config.demo.characters);
            style::print_labeled("Linked list", &format!("{:?}", config.demo.linked_list));
            println!();

            println!("Output:");
            style::print_labeled("Format", &config.output.format.to_string());
            style::print_labeled("Stats", &config.output.stats.to_string());
            println!();

            println!("Logging:");
            style::print_labeled("Level", &config.logging.level);
        }
    }

    Ok(())
}

/// Validate configuration files.
///
/// Each project file is parsed on its own first so a syntax error names the
/// file it came from; then the merged result is validated.
pub fn validate(project: &str) -> Result<()> {
    let project_path = Path::new(project);

    println!("Validating configuration in {}...", project_path.display());

    let files = Paths::existing_project_files(project_path);
    if files.is_empty() {
        style::print_hint("No sortkit.toml found, checking built-in defaults only");
    }

    for file in &files {
        if let Err(e) = SortkitConfig::from_toml_file(file) {
            style::print_error(&e.to_string());
            return Err(e.into());
        }
        style::print_success(&format!("{} parses", file.display()));
    }

    match SortkitConfig::load_from_dir(project_path) {
        Ok(_) => {
            style::print_success("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            style::print_error(&format!("Configuration validation failed: {e:#}"));
            Err(e)
        }
    }
}
